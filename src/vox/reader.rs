//! `.vox` decoding
//!
//! Reads the `MAIN` chunk's children in order and keeps the last `SIZE`,
//! `XYZI` and `RGBA` chunks seen. Any other chunk is skipped using its
//! declared sizes, which is how the format stays forward compatible.

use std::io::Read;
use std::path::Path;

use glam::UVec3;

use super::model::{Rgba, Voxel, VoxelModel};
use super::palette::PALETTE_LEN;
use super::{ChunkId, MAGIC, VERSION};
use crate::core::error::{Error, Result};

/// Cursor over an in-memory byte slice that tracks its offset for error reporting
struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::Truncated {
                offset: self.offset,
                needed: count - self.remaining(),
            });
        }
        let slice = &self.data[self.offset..self.offset + count];
        self.offset += count;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buffer = [0; N];
        buffer.copy_from_slice(self.take(N)?);
        Ok(buffer)
    }

    fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }
}

/// Chunk header as read from the wire
#[derive(Clone, Copy, Debug)]
struct ChunkHeader {
    id: ChunkId,
    content_size: u32,
    children_size: u32,
}

fn read_header(reader: &mut ByteReader<'_>) -> Result<ChunkHeader> {
    Ok(ChunkHeader {
        id: ChunkId::from_tag(reader.read_array()?),
        content_size: reader.read_u32()?,
        children_size: reader.read_u32()?,
    })
}

/// Decode a complete `.vox` byte stream into a model.
///
/// Dimensions default to zero and the palette to [`default_palette`](super::default_palette)
/// when the corresponding chunks are absent.
pub fn decode(bytes: &[u8]) -> Result<VoxelModel> {
    let mut reader = ByteReader::new(bytes);

    let magic: [u8; 4] = reader.read_array()?;
    if magic != MAGIC {
        return Err(Error::Format(format!(
            "invalid magic {:?}, expected {:?}",
            String::from_utf8_lossy(&magic),
            String::from_utf8_lossy(&MAGIC),
        )));
    }

    let version = reader.read_i32()?;
    if version != VERSION {
        return Err(Error::UnsupportedVersion(version));
    }

    let main = read_header(&mut reader)?;
    if main.id != ChunkId::Main {
        return Err(Error::Format(format!("expected MAIN chunk, found {}", main.id)));
    }

    // MAIN has no content of its own; its children_size bounds the scan.
    let end = reader.offset() + main.children_size as usize;
    if end > bytes.len() {
        return Err(Error::Truncated {
            offset: bytes.len(),
            needed: end - bytes.len(),
        });
    }

    let mut model = VoxelModel::new(UVec3::ZERO);

    while reader.offset() < end {
        let header = read_header(&mut reader)?;
        let content = reader.take(header.content_size as usize)?;

        match header.id {
            ChunkId::Size => model.size = parse_size(content)?,
            ChunkId::Xyzi => model.voxels = parse_voxels(content)?,
            ChunkId::Rgba => model.palette = parse_palette(content)?,
            ChunkId::Main | ChunkId::Unknown(_) => {
                log::debug!(
                    "Skipping {} chunk ({} content + {} children bytes)",
                    header.id,
                    header.content_size,
                    header.children_size,
                );
            }
        }

        reader.take(header.children_size as usize)?;
    }

    log::debug!(
        "Decoded .vox model: size {}, {} voxels",
        model.size,
        model.voxels.len(),
    );

    Ok(model)
}

/// Read a whole stream and decode it
pub fn read_from<R: Read>(mut source: R) -> Result<VoxelModel> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Read and decode a `.vox` file
pub fn read_file(path: &Path) -> Result<VoxelModel> {
    let bytes = std::fs::read(path)?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode(&bytes)
}

fn require(id: ChunkId, content: &[u8], needed: usize) -> Result<()> {
    if content.len() < needed {
        return Err(Error::Format(format!(
            "{} chunk content is {} bytes, needs {}",
            id,
            content.len(),
            needed,
        )));
    }
    Ok(())
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn parse_size(content: &[u8]) -> Result<UVec3> {
    require(ChunkId::Size, content, 12)?;
    Ok(UVec3::new(le_u32(content, 0), le_u32(content, 4), le_u32(content, 8)))
}

fn parse_voxels(content: &[u8]) -> Result<Vec<Voxel>> {
    require(ChunkId::Xyzi, content, 4)?;
    let count = le_u32(content, 0) as usize;
    let records_len = count
        .checked_mul(std::mem::size_of::<Voxel>())
        .ok_or_else(|| Error::Format(format!("XYZI voxel count {} overflows", count)))?;
    require(ChunkId::Xyzi, content, 4 + records_len)?;

    let records: &[Voxel] = bytemuck::try_cast_slice(&content[4..4 + records_len])
        .map_err(|e| Error::Format(format!("XYZI records: {}", e)))?;
    Ok(records.to_vec())
}

fn parse_palette(content: &[u8]) -> Result<Vec<Rgba>> {
    let len = PALETTE_LEN * std::mem::size_of::<Rgba>();
    require(ChunkId::Rgba, content, len)?;

    let entries: &[Rgba] = bytemuck::try_cast_slice(&content[..len])
        .map_err(|e| Error::Format(format!("RGBA entries: {}", e)))?;
    Ok(entries.to_vec())
}
