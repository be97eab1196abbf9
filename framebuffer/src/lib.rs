#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod canvas;
pub mod color;
pub mod placement;

pub use canvas::{Canvas, PixelSource};
pub use color::{dac_entry, dac_palette, rgb332_to_rgb888, rgb_to_332};
pub use placement::{Placement, PlacementError};

/// Mode 13h horizontal resolution
pub const VGA_WIDTH: u32 = 320;

/// Mode 13h vertical resolution
pub const VGA_HEIGHT: u32 = 200;

/// One byte per pixel, linear (320x200 = 64000 bytes)
pub const FRAMEBUFFER_SIZE: usize = (VGA_WIDTH * VGA_HEIGHT) as usize;

/// Number of entries in the VGA DAC palette
pub const PALETTE_SIZE: usize = 256;
