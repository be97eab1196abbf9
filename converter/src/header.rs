//! C header output for the framebuffer.
//!
//! The listing is a pure function of the canvas and placement, so the same
//! image always produces the same bytes.

use std::fmt;
use std::io::{self, Write};

use vga_framebuffer::{Canvas, Placement, FRAMEBUFFER_SIZE, VGA_HEIGHT, VGA_WIDTH};

/// Framebuffer values per line of the array literal
pub const BYTES_PER_LINE: usize = 16;

/// Name of the array the display program copies into video memory
pub const ARRAY_NAME: &str = "vga_framebuffer";

/// Include guard macro
pub const INCLUDE_GUARD: &str = "VGA_IMAGE_H";

/// Display adapter that renders the whole header
pub struct HeaderListing<'a> {
    canvas: &'a Canvas,
    placement: &'a Placement,
}

impl<'a> HeaderListing<'a> {
    pub fn new(canvas: &'a Canvas, placement: &'a Placement) -> Self {
        Self { canvas, placement }
    }
}

impl fmt::Display for HeaderListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.placement;

        writeln!(f, "/* Auto-generated VGA Mode 13h image data */")?;
        writeln!(
            f,
            "/* VGA Mode 13h: {}x{}, 256 colors (RGB332 palette) */",
            VGA_WIDTH, VGA_HEIGHT
        )?;
        writeln!(f)?;
        writeln!(f, "#ifndef {}", INCLUDE_GUARD)?;
        writeln!(f, "#define {}", INCLUDE_GUARD)?;
        writeln!(f)?;
        writeln!(f, "#include <stdint.h>")?;
        writeln!(f)?;
        writeln!(f, "#define IMAGE_WIDTH {}", p.new_width)?;
        writeln!(f, "#define IMAGE_HEIGHT {}", p.new_height)?;
        writeln!(f, "#define IMAGE_X_OFFSET {}", p.x_offset)?;
        writeln!(f, "#define IMAGE_Y_OFFSET {}", p.y_offset)?;
        writeln!(f)?;

        writeln!(
            f,
            "/* Linear framebuffer data ({}x{} = {} bytes) */",
            VGA_WIDTH, VGA_HEIGHT, FRAMEBUFFER_SIZE
        )?;
        writeln!(f, "static const uint8_t {}[{}] = {{", ARRAY_NAME, FRAMEBUFFER_SIZE)?;
        for line in self.canvas.as_bytes().chunks(BYTES_PER_LINE) {
            f.write_str("    ")?;
            for (i, byte) in line.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "0x{:02x}", byte)?;
            }
            f.write_str(",\n")?;
        }
        writeln!(f, "}};")?;
        writeln!(f)?;

        writeln!(f, "#endif /* {} */", INCLUDE_GUARD)
    }
}

/// Write the header listing to `out`
pub fn write_header<W: Write>(out: &mut W, canvas: &Canvas, placement: &Placement) -> io::Result<()> {
    write!(out, "{}", HeaderListing::new(canvas, placement))
}
