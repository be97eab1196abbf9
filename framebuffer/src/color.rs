//! RGB332 color encoding and the matching VGA DAC palette.
//!
//! Each framebuffer byte is laid out as `RRRGGGBB`. The display program
//! loads a palette where index `i` is the color those bits describe, so a
//! pixel can be written to the framebuffer without any lookup.

use crate::PALETTE_SIZE;

/// Convert 24-bit RGB to an RGB332 palette index.
///
/// Keeps the top 3 bits of red and green and the top 2 bits of blue.
pub fn rgb_to_332(r: u8, g: u8, b: u8) -> u8 {
    let r3 = (r >> 5) & 0x07;
    let g3 = (g >> 5) & 0x07;
    let b2 = (b >> 6) & 0x03;
    (r3 << 5) | (g3 << 2) | b2
}

/// 6-bit DAC components (0-63) for an RGB332 index
pub fn dac_entry(index: u8) -> [u8; 3] {
    let r3 = (index >> 5) & 0x07;
    let g3 = (index >> 2) & 0x07;
    let b2 = index & 0x03;

    // 7 * 9 = 63, 3 * 21 = 63
    [r3 * 9, g3 * 9, b2 * 21]
}

/// Full 256-entry DAC palette in index order
pub fn dac_palette() -> [[u8; 3]; PALETTE_SIZE] {
    let mut palette = [[0u8; 3]; PALETTE_SIZE];
    for (index, entry) in palette.iter_mut().enumerate() {
        *entry = dac_entry(index as u8);
    }
    palette
}

/// Color a palette index displays as, in 8-bit channels
pub fn rgb332_to_rgb888(index: u8) -> (u8, u8, u8) {
    let [r6, g6, b6] = dac_entry(index);
    (widen_dac(r6), widen_dac(g6), widen_dac(b6))
}

fn widen_dac(value: u8) -> u8 {
    (value << 2) | (value >> 4)
}
