//! Default palette and palette normalization

use super::model::Rgba;

/// Number of entries in a `.vox` palette
pub const PALETTE_LEN: usize = 256;

/// 16-color ramp the default palette repeats
const DEFAULT_RAMP: [Rgba; 16] = [
    Rgba::opaque(0, 0, 0),
    Rgba::opaque(255, 255, 255),
    Rgba::opaque(128, 128, 128),
    Rgba::opaque(255, 0, 0),
    Rgba::opaque(0, 255, 0),
    Rgba::opaque(0, 0, 255),
    Rgba::opaque(255, 255, 0),
    Rgba::opaque(0, 255, 255),
    Rgba::opaque(255, 0, 255),
    Rgba::opaque(128, 0, 0),
    Rgba::opaque(0, 128, 0),
    Rgba::opaque(0, 0, 128),
    Rgba::opaque(128, 128, 0),
    Rgba::opaque(0, 128, 128),
    Rgba::opaque(128, 0, 128),
    Rgba::opaque(128, 0, 128),
];

const fn tile_ramp() -> [Rgba; PALETTE_LEN] {
    let mut palette = [Rgba::TRANSPARENT; PALETTE_LEN];
    let mut i = 0;
    while i < PALETTE_LEN {
        palette[i] = DEFAULT_RAMP[i % DEFAULT_RAMP.len()];
        i += 1;
    }
    palette
}

static DEFAULT_PALETTE: [Rgba; PALETTE_LEN] = tile_ramp();

/// Palette used when a file has no `RGBA` chunk
pub fn default_palette() -> &'static [Rgba; PALETTE_LEN] {
    &DEFAULT_PALETTE
}

/// Truncate or pad a palette to exactly 256 entries.
/// Padding entries are fully transparent black.
pub fn normalize(palette: &[Rgba]) -> [Rgba; PALETTE_LEN] {
    let mut out = [Rgba::TRANSPARENT; PALETTE_LEN];
    let n = palette.len().min(PALETTE_LEN);
    out[..n].copy_from_slice(&palette[..n]);
    out
}
