//! In-memory voxel model

use bytemuck::{Pod, Zeroable};
use glam::UVec3;

use super::palette::default_palette;

/// Single voxel record - exactly 4 bytes, laid out as on the wire
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Voxel {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    /// Index into the model palette
    pub color_index: u8,
}

impl Voxel {
    /// Create a voxel record
    pub const fn new(x: u8, y: u8, z: u8, color_index: u8) -> Self {
        Self { x, y, z, color_index }
    }

    /// Position as a vector
    pub fn position(&self) -> UVec3 {
        UVec3::new(self.x.into(), self.y.into(), self.z.into())
    }
}

/// Palette entry - exactly 4 bytes, laid out as on the wire
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, used to pad short palettes
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a palette entry
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// A single `.vox` model: dimensions, sparse voxel list and palette
///
/// Voxels are not required to lie inside `size`; the reader keeps whatever
/// the file contains. Use [`VoxelModel::contains`] to check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelModel {
    /// Dimensions along x, y, z
    pub size: UVec3,
    /// Voxel records in file order
    pub voxels: Vec<Voxel>,
    /// Color palette; 256 entries after decoding
    pub palette: Vec<Rgba>,
}

impl Default for VoxelModel {
    fn default() -> Self {
        Self::new(UVec3::ZERO)
    }
}

impl VoxelModel {
    /// Create an empty model with the default palette
    pub fn new(size: UVec3) -> Self {
        Self {
            size,
            voxels: Vec::new(),
            palette: default_palette().to_vec(),
        }
    }

    /// Check whether a voxel lies within the model bounds
    pub fn contains(&self, voxel: &Voxel) -> bool {
        voxel.position().cmplt(self.size).all()
    }

    /// Number of voxel records
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Check if the model has no voxels
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Palette color for a voxel, if the palette covers its index
    pub fn color_of(&self, voxel: &Voxel) -> Option<Rgba> {
        self.palette.get(usize::from(voxel.color_index)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sizes() {
        assert_eq!(std::mem::size_of::<Voxel>(), 4);
        assert_eq!(std::mem::size_of::<Rgba>(), 4);
    }

    #[test]
    fn test_voxel_byte_layout() {
        let voxel = Voxel::new(1, 2, 3, 4);
        assert_eq!(bytemuck::bytes_of(&voxel), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_contains() {
        let model = VoxelModel::new(UVec3::new(2, 3, 4));
        assert!(model.contains(&Voxel::new(1, 2, 3, 1)));
        assert!(!model.contains(&Voxel::new(2, 0, 0, 1)));
        assert!(!model.contains(&Voxel::new(0, 3, 0, 1)));
        assert!(!model.contains(&Voxel::new(0, 0, 4, 1)));
    }

    #[test]
    fn test_default_model() {
        let model = VoxelModel::default();
        assert_eq!(model.size, UVec3::ZERO);
        assert!(model.is_empty());
        assert_eq!(model.palette.len(), 256);
    }

    #[test]
    fn test_color_of() {
        let mut model = VoxelModel::new(UVec3::ONE);
        model.palette.truncate(2);
        assert_eq!(model.color_of(&Voxel::new(0, 0, 0, 1)), Some(Rgba::opaque(255, 255, 255)));
        assert_eq!(model.color_of(&Voxel::new(0, 0, 0, 7)), None);
    }
}
