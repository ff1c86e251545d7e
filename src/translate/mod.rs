//! Translation between `.vox` models and sparse JSON voxel maps
//!
//! The JSON side is keyed by `"x,y,z"` strings with y flipped
//! (`y' = size_y - 1 - y`). Only voxels present in the model are emitted;
//! an absent key means "not solid". Keys keep voxel-file order.

pub mod document;

use glam::UVec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::material::{index_for_material, material_for_index};
use crate::vox::{Voxel, VoxelModel};

pub use document::VoxelDocument;

/// One entry of the sparse map
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelCell {
    /// Material name
    pub material: String,
    /// Whether the position is occupied
    pub solid: bool,
}

impl VoxelCell {
    /// A solid cell of the given material
    pub fn solid(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            solid: true,
        }
    }
}

/// Coordinate-keyed voxel map, serialized as a plain JSON object
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVoxelMap {
    cells: IndexMap<String, VoxelCell>,
}

impl SparseVoxelMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell at a position, replacing any existing cell there
    pub fn insert(&mut self, x: i64, y: i64, z: i64, cell: VoxelCell) -> Option<VoxelCell> {
        self.cells.insert(voxel_key(x, y, z), cell)
    }

    /// Cell at a position
    pub fn get(&self, x: i64, y: i64, z: i64) -> Option<&VoxelCell> {
        self.cells.get(&voxel_key(x, y, z))
    }

    /// Cell by raw key
    pub fn get_key(&self, key: &str) -> Option<&VoxelCell> {
        self.cells.get(key)
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the map has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(key, cell)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VoxelCell)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Format a position as a map key
pub fn voxel_key(x: i64, y: i64, z: i64) -> String {
    format!("{},{},{}", x, y, z)
}

/// Parse a `"x,y,z"` map key
pub fn parse_key(key: &str) -> Result<(i64, i64, i64)> {
    let invalid = || Error::Document(format!("invalid voxel key {:?}", key));

    let mut parts = key.split(',').map(|p| p.trim().parse::<i64>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok((x, y, z)),
        _ => Err(invalid()),
    }
}

fn flip(value: i64, extent: u32, flip_y: bool) -> i64 {
    if flip_y {
        i64::from(extent) - 1 - value
    } else {
        value
    }
}

/// Convert a model to a sparse map with the y axis flipped
pub fn to_sparse_map(model: &VoxelModel) -> SparseVoxelMap {
    to_sparse_map_with(model, true)
}

/// Convert a model to a sparse map, optionally flipping the y axis.
///
/// Later voxels at a repeated position overwrite earlier ones but keep the
/// first one's place in the key order.
pub fn to_sparse_map_with(model: &VoxelModel, flip_y: bool) -> SparseVoxelMap {
    let mut map = SparseVoxelMap::new();
    for voxel in &model.voxels {
        map.insert(
            i64::from(voxel.x),
            flip(i64::from(voxel.y), model.size.y, flip_y),
            i64::from(voxel.z),
            VoxelCell::solid(material_for_index(i64::from(voxel.color_index))),
        );
    }
    map
}

/// Rebuild a model from a sparse map.
///
/// Cells with `solid == false` are skipped. When `size` is `None` the
/// dimensions are the tight bounds of the solid keys. The palette is the
/// default palette.
pub fn from_sparse_map(map: &SparseVoxelMap, size: Option<UVec3>, flip_y: bool) -> Result<VoxelModel> {
    let mut cells = Vec::with_capacity(map.len());
    for (key, cell) in map.iter().filter(|(_, cell)| cell.solid) {
        cells.push((parse_key(key)?, cell));
    }

    let size = match size {
        Some(size) => size,
        None => infer_size(cells.iter().map(|(pos, _)| *pos))?,
    };

    let mut model = VoxelModel::new(size);
    model.voxels.reserve(cells.len());

    for ((x, y, z), cell) in cells {
        let y = flip(y, size.y, flip_y);
        let coord = |v: i64| {
            u8::try_from(v).map_err(|_| {
                Error::ModelTooLarge(format!("voxel ({}, {}, {}) outside 0..=255", x, y, z))
            })
        };
        model.voxels.push(Voxel::new(
            coord(x)?,
            coord(y)?,
            coord(z)?,
            index_for_material(&cell.material),
        ));
    }

    Ok(model)
}

fn infer_size(positions: impl Iterator<Item = (i64, i64, i64)>) -> Result<UVec3> {
    let mut max = [-1i64; 3];
    for (x, y, z) in positions {
        max = [max[0].max(x), max[1].max(y), max[2].max(z)];
    }

    let extent = |m: i64| {
        u32::try_from(m + 1)
            .map_err(|_| Error::ModelTooLarge(format!("extent {} does not fit the format", m + 1)))
    };
    Ok(UVec3::new(extent(max[0])?, extent(max[1])?, extent(max[2])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(size: UVec3, voxels: &[Voxel]) -> VoxelModel {
        let mut model = VoxelModel::new(size);
        model.voxels = voxels.to_vec();
        model
    }

    #[test]
    fn test_y_flip() {
        let m = model(UVec3::new(10, 10, 10), &[Voxel::new(0, 0, 0, 2), Voxel::new(1, 9, 1, 3)]);
        let map = to_sparse_map(&m);

        assert_eq!(map.get(0, 9, 0), Some(&VoxelCell::solid("grass")));
        assert_eq!(map.get(1, 0, 1), Some(&VoxelCell::solid("leaves")));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_without_flip() {
        let m = model(UVec3::new(10, 10, 10), &[Voxel::new(0, 0, 0, 2)]);
        let map = to_sparse_map_with(&m, false);
        assert!(map.get_key("0,0,0").is_some());
    }

    #[test]
    fn test_empty_model_gives_empty_map() {
        let map = to_sparse_map(&VoxelModel::new(UVec3::splat(4)));
        assert!(map.is_empty());
        assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
    }

    #[test]
    fn test_out_of_range_color_uses_fallback() {
        let m = model(UVec3::splat(2), &[Voxel::new(0, 0, 0, 200)]);
        let map = to_sparse_map(&m);
        assert_eq!(map.get(0, 1, 0).unwrap().material, "structure");
    }

    #[test]
    fn test_zero_height_gives_negative_key() {
        let m = model(UVec3::ZERO, &[Voxel::new(1, 2, 3, 2)]);
        let map = to_sparse_map(&m);
        assert!(map.get_key("1,-3,3").is_some());
    }

    #[test]
    fn test_duplicate_positions_collapse() {
        let m = model(UVec3::splat(2), &[Voxel::new(0, 0, 0, 2), Voxel::new(0, 0, 0, 3)]);
        let map = to_sparse_map(&m);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(0, 1, 0).unwrap().material, "leaves");
    }

    #[test]
    fn test_serialized_shape() {
        let m = model(UVec3::new(1, 5, 4), &[Voxel::new(0, 2, 3, 9)]);
        let value = serde_json::to_value(to_sparse_map(&m)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "0,2,3": { "material": "dirt", "solid": true } })
        );
    }

    #[test]
    fn test_keys_follow_voxel_order() {
        let m = model(
            UVec3::new(11, 1, 1),
            &[Voxel::new(10, 0, 0, 2), Voxel::new(2, 0, 0, 3), Voxel::new(0, 0, 0, 4)],
        );
        let map = to_sparse_map(&m);

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["10,0,0", "2,0,0", "0,0,0"]);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            concat!(
                r#"{"10,0,0":{"material":"grass","solid":true},"#,
                r#""2,0,0":{"material":"leaves","solid":true},"#,
                r#""0,0,0":{"material":"vines","solid":true}}"#,
            )
        );
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("1,2,3").unwrap(), (1, 2, 3));
        assert_eq!(parse_key("-1,0,7").unwrap(), (-1, 0, 7));
        assert!(parse_key("1,2").is_err());
        assert!(parse_key("1,2,3,4").is_err());
        assert!(parse_key("a,b,c").is_err());
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_from_sparse_map_roundtrip() {
        let m = model(
            UVec3::new(4, 6, 5),
            &[Voxel::new(0, 0, 0, 2), Voxel::new(3, 5, 4, 11), Voxel::new(1, 2, 3, 21)],
        );
        let map = to_sparse_map(&m);
        let rebuilt = from_sparse_map(&map, Some(m.size), true).expect("rebuild failed");

        assert_eq!(rebuilt.size, m.size);
        let mut expected = m.voxels.clone();
        let mut actual = rebuilt.voxels.clone();
        expected.sort_by_key(|v| (v.x, v.y, v.z));
        actual.sort_by_key(|v| (v.x, v.y, v.z));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_from_sparse_map_infers_size() {
        let mut map = SparseVoxelMap::new();
        map.insert(2, 0, 0, VoxelCell::solid("stone"));
        map.insert(0, 3, 1, VoxelCell::solid("grass"));

        let rebuilt = from_sparse_map(&map, None, true).expect("rebuild failed");
        assert_eq!(rebuilt.size, UVec3::new(3, 4, 2));
        // y' = 3 unflips to 0, y' = 0 unflips to 3
        assert!(rebuilt.voxels.contains(&Voxel::new(0, 0, 1, 2)));
        assert!(rebuilt.voxels.contains(&Voxel::new(2, 3, 0, 11)));
    }

    #[test]
    fn test_from_sparse_map_skips_non_solid() {
        let mut map = SparseVoxelMap::new();
        map.insert(0, 0, 0, VoxelCell { material: "grass".into(), solid: false });
        let rebuilt = from_sparse_map(&map, None, true).expect("rebuild failed");
        assert!(rebuilt.voxels.is_empty());
        assert_eq!(rebuilt.size, UVec3::ZERO);
    }

    #[test]
    fn test_from_sparse_map_rejects_large_coordinates() {
        let mut map = SparseVoxelMap::new();
        map.insert(300, 0, 0, VoxelCell::solid("grass"));
        let err = from_sparse_map(&map, None, true).unwrap_err();
        assert!(matches!(err, Error::ModelTooLarge(_)), "{err:?}");
    }

    #[test]
    fn test_from_sparse_map_rejects_bad_key() {
        let map: SparseVoxelMap = serde_json::from_value(serde_json::json!({
            "not-a-key": { "material": "grass", "solid": true }
        }))
        .unwrap();
        let err = from_sparse_map(&map, None, true).unwrap_err();
        assert!(matches!(err, Error::Document(_)), "{err:?}");
    }
}
