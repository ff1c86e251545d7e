//! MagicaVoxel `.vox` chunk codec
//!
//! The container is a magic token, a version integer and a single `MAIN`
//! chunk whose children carry the model. Every chunk is framed as
//! `tag(4) + content_size(u32) + children_size(u32)` followed by its content
//! and then its children. All integers are little-endian.

pub mod model;
pub mod palette;
pub mod reader;
pub mod writer;

pub use model::{Rgba, Voxel, VoxelModel};
pub use palette::{default_palette, PALETTE_LEN};
pub use reader::{decode, read_file, read_from};
pub use writer::{encode, write_file, write_to};

/// File magic, including the trailing space
pub const MAGIC: [u8; 4] = *b"VOX ";

/// The only format version this codec reads and writes
pub const VERSION: i32 = 150;

/// Size of a chunk header: tag + content size + children size
pub const CHUNK_HEADER_LEN: usize = 12;

/// Chunk types the codec understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChunkId {
    /// Root container
    Main,
    /// Model dimensions
    Size,
    /// Voxel positions and color indices
    Xyzi,
    /// 256-entry color palette
    Rgba,
    /// Anything else; skipped verbatim
    Unknown([u8; 4]),
}

impl ChunkId {
    /// Classify a raw tag
    pub fn from_tag(tag: [u8; 4]) -> Self {
        match &tag {
            b"MAIN" => ChunkId::Main,
            b"SIZE" => ChunkId::Size,
            b"XYZI" => ChunkId::Xyzi,
            b"RGBA" => ChunkId::Rgba,
            _ => ChunkId::Unknown(tag),
        }
    }

    /// Raw tag written on the wire
    pub fn tag(self) -> [u8; 4] {
        match self {
            ChunkId::Main => *b"MAIN",
            ChunkId::Size => *b"SIZE",
            ChunkId::Xyzi => *b"XYZI",
            ChunkId::Rgba => *b"RGBA",
            ChunkId::Unknown(tag) => tag,
        }
    }
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.tag()))
    }
}
