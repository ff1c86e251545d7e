//! Palette index to material name lookup
//!
//! The table is positional: palette index `i` names material `MATERIALS[i]`.
//! Indices 0 and 1 are both `"structure"`; consumers of the JSON output
//! depend on that, so it is kept as is.

/// Material used for any index the table does not cover
pub const FALLBACK_MATERIAL: &str = "structure";

/// Material names by palette index
pub const MATERIALS: [&str; 22] = [
    "structure",
    "structure",
    "grass",
    "leaves",
    "vines",
    "fruit",
    "flower",
    "bark",
    "wood",
    "dirt",
    "sand",
    "stone",
    "stoneAccent",
    "stoneAccent2",
    "stoneRoof",
    "metal",
    "metalAccent",
    "sign",
    "signText",
    "bone",
    "rune",
    "crystal",
];

/// Palette index written for materials the table does not know
pub const FALLBACK_INDEX: u8 = 1;

/// Material name for a palette index; [`FALLBACK_MATERIAL`] when out of range
pub fn material_for_index(index: i64) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| MATERIALS.get(i))
        .copied()
        .unwrap_or(FALLBACK_MATERIAL)
}

/// Palette index for a material name.
///
/// Index 0 is the empty slot in `.vox` files, so the search starts at 1 and
/// `"structure"` maps to 1. Unknown names map to [`FALLBACK_INDEX`].
pub fn index_for_material(name: &str) -> u8 {
    match MATERIALS.iter().skip(1).position(|m| *m == name) {
        Some(pos) => (pos + 1) as u8,
        None => {
            log::warn!("Unknown material {:?}, using index {}", name, FALLBACK_INDEX);
            FALLBACK_INDEX
        }
    }
}
