//! Error types for voxjson

use thiserror::Error;

/// Main error type for decoding, encoding and converting voxel models
#[derive(Debug, Error)]
pub enum Error {
    /// Bad magic, bad root chunk, or chunk content that cannot hold what its tag promises
    #[error("Format error: {0}")]
    Format(String),

    #[error("Unsupported .vox version: {0}")]
    UnsupportedVersion(i32),

    /// The byte stream ended inside a header or chunk
    #[error("Truncated data: needed {needed} more bytes at offset {offset}")]
    Truncated { offset: usize, needed: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON that is not shaped like a voxel document
    #[error("Document error: {0}")]
    Document(String),

    #[error("Model too large: {0}")]
    ModelTooLarge(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
