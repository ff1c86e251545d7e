//! Conversion configuration.

use glam::UVec3;

/// Options shared by both conversion directions.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertConfig {
    /// Indentation width of written JSON documents
    pub indent: usize,
    /// Flip the y axis between the .vox and JSON coordinate systems
    pub flip_y: bool,
    /// Dimensions to use when rebuilding a model from a sparse map.
    /// `None` infers the tight bounds of the sparse keys.
    pub model_size: Option<UVec3>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            flip_y: true,
            model_size: None,
        }
    }
}

impl ConvertConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the rebuild dimensions.
    pub fn with_model_size(mut self, size: UVec3) -> Self {
        self.model_size = Some(size);
        self
    }
}
