use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::info;
use vga_framebuffer::{rgb332_to_rgb888, rgb_to_332, Canvas, Placement};

use crate::error::ConvertError;
use crate::header::write_header;
use crate::loader::{load_rgb, resample, Resampled};

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub source_width: u32,
    pub source_height: u32,
    pub placement: Placement,
    /// CRC-32 of the 64000 framebuffer bytes
    pub checksum: u32,
    pub distinct_colors: usize,
    /// Mean per-channel distance between resized and displayed colors
    pub quantization_error: f64,
}

/// Convert the image at `input` into a Mode 13h header at `output`.
///
/// `output` is only created once the framebuffer is complete.
pub fn convert(input: &Path, output: &Path) -> Result<Conversion, ConvertError> {
    let source = load_rgb(input)?;
    let (source_width, source_height) = source.dimensions();
    info!("Original image: {}x{}", source_width, source_height);

    let placement = Placement::fit(source_width, source_height)?;
    let resized = resample(&source, &placement);

    info!("Resized image to {}x{}", placement.new_width, placement.new_height);
    info!("Offset: ({}, {})", placement.x_offset, placement.y_offset);

    let quantization_error = mean_quantization_error(&resized);

    let mut canvas = Canvas::new();
    canvas.composite(&placement, &Resampled(resized));

    write_output(output, &canvas, &placement)?;
    info!("Wrote {}", output.display());

    Ok(Conversion {
        source_width,
        source_height,
        placement,
        checksum: crc32fast::hash(canvas.as_bytes()),
        distinct_colors: canvas.distinct_colors(),
        quantization_error,
    })
}

/// Average absolute channel difference between `image` and the palette
/// colors its pixels quantize to. An empty image has no error.
fn mean_quantization_error(image: &RgbImage) -> f64 {
    let pixels = image.width() as u64 * image.height() as u64;
    if pixels == 0 {
        return 0.0;
    }

    let total: u64 = image
        .pixels()
        .map(|&Rgb([r, g, b])| {
            let (qr, qg, qb) = rgb332_to_rgb888(rgb_to_332(r, g, b));
            r.abs_diff(qr) as u64 + g.abs_diff(qg) as u64 + b.abs_diff(qb) as u64
        })
        .sum();

    total as f64 / (pixels * 3) as f64
}

fn write_output(path: &Path, canvas: &Canvas, placement: &Placement) -> Result<(), ConvertError> {
    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    write_header(&mut out, canvas, placement).map_err(write_err)?;
    out.flush().map_err(write_err)
}
