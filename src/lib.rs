//! Voxjson - MagicaVoxel `.vox` to sparse JSON voxel map converter
//!
//! [`vox`] holds the binary chunk codec, [`translate`] maps decoded models to
//! and from coordinate-keyed JSON, and [`convert`] ties both to files.

pub mod core;
pub mod vox;
pub mod material;
pub mod translate;
pub mod convert;

pub use crate::core::{ConvertConfig, Error, Result};
pub use crate::vox::{Rgba, Voxel, VoxelModel};
pub use crate::translate::{SparseVoxelMap, VoxelCell, VoxelDocument};
