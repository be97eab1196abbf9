#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::color::rgb_to_332;
use crate::placement::Placement;
use crate::{FRAMEBUFFER_SIZE, PALETTE_SIZE, VGA_HEIGHT, VGA_WIDTH};

/// Image that can be read pixel by pixel during compositing
pub trait PixelSource {
    /// (width, height) in pixels
    fn dimensions(&self) -> (u32, u32);

    /// RGB sample at (x, y); only called with in-bounds coordinates
    fn rgb_at(&self, x: u32, y: u32) -> (u8, u8, u8);
}

/// Linear 320x200 framebuffer of RGB332 palette indices, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create an all-black canvas
    pub fn new() -> Self {
        Self {
            pixels: vec![0; FRAMEBUFFER_SIZE],
        }
    }

    /// Draw `source` at `placement`, quantizing every pixel.
    ///
    /// Every canvas coordinate is written exactly once. Coordinates
    /// outside the placed area, or beyond the bounds of a source smaller
    /// than the placement, become black.
    pub fn composite<S: PixelSource>(&mut self, placement: &Placement, source: &S) {
        let (src_width, src_height) = source.dimensions();

        for y in 0..VGA_HEIGHT {
            for x in 0..VGA_WIDTH {
                let (r, g, b) = match placement.contains(x, y) {
                    Some((sx, sy)) if sx < src_width && sy < src_height => source.rgb_at(sx, sy),
                    _ => (0, 0, 0),
                };

                self.pixels[Self::index(x, y)] = rgb_to_332(r, g, b);
            }
        }
    }

    /// Palette index at (x, y), `None` when off-canvas
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= VGA_WIDTH || y >= VGA_HEIGHT {
            return None;
        }
        Some(self.pixels[Self::index(x, y)])
    }

    /// Raw framebuffer bytes, always `FRAMEBUFFER_SIZE` long
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of distinct palette indices in use
    pub fn distinct_colors(&self) -> usize {
        let mut used = [false; PALETTE_SIZE];
        for &p in &self.pixels {
            used[p as usize] = true;
        }
        used.iter().filter(|&&u| u).count()
    }

    fn index(x: u32, y: u32) -> usize {
        (y * VGA_WIDTH + x) as usize
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
