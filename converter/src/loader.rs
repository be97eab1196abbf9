use std::path::Path;

use image::imageops::{self, FilterType};
use image::io::Reader as ImageReader;
use image::{Rgb, RgbImage};
use vga_framebuffer::{PixelSource, Placement};

use crate::error::ConvertError;

/// Decode any supported image file into 8-bit RGB, dropping alpha
pub fn load_rgb(path: &Path) -> Result<RgbImage, ConvertError> {
    let open_err = |source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;

    let image = reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(image.to_rgb8())
}

/// Resize to the placement's dimensions with Lanczos3 filtering.
///
/// An empty placement yields a 0x0 image without running the filter.
pub fn resample(image: &RgbImage, placement: &Placement) -> RgbImage {
    if placement.is_empty() {
        return RgbImage::new(0, 0);
    }

    imageops::resize(
        image,
        placement.new_width,
        placement.new_height,
        FilterType::Lanczos3,
    )
}

/// Resized image as a compositing source
pub struct Resampled(pub RgbImage);

impl PixelSource for Resampled {
    fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    fn rgb_at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let Rgb([r, g, b]) = *self.0.get_pixel(x, y);
        (r, g, b)
    }
}
