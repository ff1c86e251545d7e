//! `.vox` encoding
//!
//! Always writes `SIZE`, `XYZI`, `RGBA` in that order under a single `MAIN`
//! chunk. The `MAIN` children size is the running total of the child chunks
//! actually emitted.

use std::io::Write;
use std::path::Path;

use super::model::VoxelModel;
use super::palette;
use super::{ChunkId, CHUNK_HEADER_LEN, MAGIC, VERSION};
use crate::core::error::{Error, Result};

/// Append one childless chunk to `out`
fn push_chunk(out: &mut Vec<u8>, id: ChunkId, content: &[u8]) -> Result<()> {
    let content_size = u32::try_from(content.len())
        .map_err(|_| Error::ModelTooLarge(format!("{} chunk is {} bytes", id, content.len())))?;

    out.reserve(CHUNK_HEADER_LEN + content.len());
    out.extend_from_slice(&id.tag());
    out.extend_from_slice(&content_size.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(content);
    Ok(())
}

/// Encode a model into `.vox` bytes.
///
/// The palette is truncated or padded with transparent black to exactly
/// 256 entries.
pub fn encode(model: &VoxelModel) -> Result<Vec<u8>> {
    let count = u32::try_from(model.voxels.len())
        .map_err(|_| Error::ModelTooLarge(format!("{} voxels", model.voxels.len())))?;

    let mut children = Vec::new();

    let size: Vec<u8> = model.size.to_array().iter().flat_map(|v| v.to_le_bytes()).collect();
    push_chunk(&mut children, ChunkId::Size, &size)?;

    let voxel_bytes: &[u8] = bytemuck::cast_slice(&model.voxels);
    let mut xyzi = Vec::with_capacity(4 + voxel_bytes.len());
    xyzi.extend_from_slice(&count.to_le_bytes());
    xyzi.extend_from_slice(voxel_bytes);
    push_chunk(&mut children, ChunkId::Xyzi, &xyzi)?;

    let palette = palette::normalize(&model.palette);
    push_chunk(&mut children, ChunkId::Rgba, bytemuck::cast_slice(&palette))?;

    let children_size = u32::try_from(children.len())
        .map_err(|_| Error::ModelTooLarge(format!("MAIN children are {} bytes", children.len())))?;

    let mut out = Vec::with_capacity(8 + CHUNK_HEADER_LEN + children.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&ChunkId::Main.tag());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&children_size.to_le_bytes());
    out.extend_from_slice(&children);

    log::debug!(
        "Encoded .vox model: {} voxels, {} bytes",
        model.voxels.len(),
        out.len(),
    );

    Ok(out)
}

/// Encode a model and write it to `sink`
pub fn write_to<W: Write>(model: &VoxelModel, mut sink: W) -> Result<()> {
    let bytes = encode(model)?;
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

/// Encode a model and write it to a file, creating parent directories as needed
pub fn write_file(model: &VoxelModel, path: &Path) -> Result<()> {
    let bytes = encode(model)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, bytes)?;
    Ok(())
}
