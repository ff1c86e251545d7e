//! Whole-file conversions between `.vox` models and JSON documents

use std::path::Path;

use crate::core::config::ConvertConfig;
use crate::core::error::Result;
use crate::translate::{self, VoxelDocument};
use crate::vox;

/// Summary of a finished conversion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Voxel records in the source
    pub voxels_read: usize,
    /// Voxel records or map entries written; repeated positions collapse
    pub entries_written: usize,
}

/// Convert a `.vox` file into the `voxels` key of an existing JSON document.
///
/// The document at `output` must already exist and hold a JSON object. Its
/// `voxels` key is replaced; all other fields are preserved.
pub fn vox_to_json(input: &Path, output: &Path, config: &ConvertConfig) -> Result<ConvertStats> {
    let model = vox::read_file(input)?;
    let map = translate::to_sparse_map_with(&model, config.flip_y);

    let mut document = VoxelDocument::load(output)?;
    document.replace_voxels(&map)?;
    document.save(output, config.indent)?;

    let stats = ConvertStats {
        voxels_read: model.voxels.len(),
        entries_written: map.len(),
    };
    log::info!(
        "Converted {} ({} voxels, size {}) -> {} ({} entries)",
        input.display(),
        stats.voxels_read,
        model.size,
        output.display(),
        stats.entries_written,
    );
    Ok(stats)
}

/// Convert the `voxels` key of a JSON document into a `.vox` file.
pub fn json_to_vox(input: &Path, output: &Path, config: &ConvertConfig) -> Result<ConvertStats> {
    let document = VoxelDocument::load(input)?;
    let map = document.voxels()?;
    let model = translate::from_sparse_map(&map, config.model_size, config.flip_y)?;

    vox::write_file(&model, output)?;

    let stats = ConvertStats {
        voxels_read: map.len(),
        entries_written: model.voxels.len(),
    };
    log::info!(
        "Converted {} ({} entries) -> {} ({} voxels, size {})",
        input.display(),
        stats.voxels_read,
        output.display(),
        stats.entries_written,
        model.size,
    );
    Ok(stats)
}
