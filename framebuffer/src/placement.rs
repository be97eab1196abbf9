use core::fmt;

use crate::{VGA_HEIGHT, VGA_WIDTH};

/// Placement errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Source image has zero width or height
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "image has zero dimension ({}x{})", width, height)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

/// Scaled size and centering offset of a source image on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Width after resizing
    pub new_width: u32,
    /// Height after resizing
    pub new_height: u32,
    /// Left border in pixels
    pub x_offset: u32,
    /// Top border in pixels
    pub y_offset: u32,
}

impl Placement {
    /// Fit a `width`x`height` source into the 320x200 Mode 13h canvas
    pub fn fit(width: u32, height: u32) -> Result<Self, PlacementError> {
        Self::fit_into(width, height, VGA_WIDTH, VGA_HEIGHT)
    }

    /// Fit a source into an arbitrary canvas, preserving aspect ratio.
    ///
    /// The source is scaled until it touches the canvas edge on its
    /// limiting axis and centered on the other one. Both floors are taken
    /// on the exact ratio, so `new_width <= canvas_width` and
    /// `new_height <= canvas_height` always hold.
    pub fn fit_into(
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Self, PlacementError> {
        if width == 0 || height == 0 {
            return Err(PlacementError::ZeroDimension { width, height });
        }

        let (sw, sh) = (width as u64, height as u64);
        let (cw, ch) = (canvas_width as u64, canvas_height as u64);

        // sw/sh > cw/ch, cross-multiplied
        let (new_width, new_height) = if sw * ch > cw * sh {
            (canvas_width, (cw * sh / sw) as u32)
        } else {
            ((ch * sw / sh) as u32, canvas_height)
        };

        Ok(Self {
            new_width,
            new_height,
            x_offset: (canvas_width - new_width) / 2,
            y_offset: (canvas_height - new_height) / 2,
        })
    }

    /// True when the resized image has no pixels (extreme aspect ratios)
    pub fn is_empty(&self) -> bool {
        self.new_width == 0 || self.new_height == 0
    }

    /// Map a canvas coordinate to a coordinate in the resized image
    pub fn contains(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        let src_x = x.checked_sub(self.x_offset)?;
        let src_y = y.checked_sub(self.y_offset)?;

        if src_x < self.new_width && src_y < self.new_height {
            Some((src_x, src_y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_invariants_over_many_sizes() {
        let sizes = [1u32, 2, 3, 7, 10, 99, 100, 199, 200, 201, 319, 320, 321, 399, 400, 640, 1080, 1920, 4095];

        for &sw in &sizes {
            for &sh in &sizes {
                let p = Placement::fit(sw, sh).unwrap();

                assert!(p.new_width <= VGA_WIDTH, "{}x{} -> {:?}", sw, sh, p);
                assert!(p.new_height <= VGA_HEIGHT, "{}x{} -> {:?}", sw, sh, p);
                assert!(
                    p.new_width == VGA_WIDTH || p.new_height == VGA_HEIGHT,
                    "{}x{} -> {:?}",
                    sw,
                    sh,
                    p
                );
                assert_eq!(p.x_offset, (VGA_WIDTH - p.new_width) / 2);
                assert_eq!(p.y_offset, (VGA_HEIGHT - p.new_height) / 2);
            }
        }
    }

    #[test]
    fn test_fit_matching_aspect() {
        let p = Placement::fit(640, 400).unwrap();
        assert_eq!(
            p,
            Placement { new_width: 320, new_height: 200, x_offset: 0, y_offset: 0 }
        );
    }

    #[test]
    fn test_fit_square_is_height_limited() {
        let p = Placement::fit(100, 100).unwrap();
        assert_eq!(
            p,
            Placement { new_width: 200, new_height: 200, x_offset: 60, y_offset: 0 }
        );
    }

    #[test]
    fn test_fit_wide_and_tall() {
        let wide = Placement::fit(1920, 1080).unwrap();
        assert_eq!((wide.new_width, wide.new_height), (320, 180));
        assert_eq!((wide.x_offset, wide.y_offset), (0, 10));

        let tall = Placement::fit(200, 400).unwrap();
        assert_eq!((tall.new_width, tall.new_height), (100, 200));
        assert_eq!((tall.x_offset, tall.y_offset), (110, 0));
    }

    #[test]
    fn test_fit_odd_remainder() {
        // 320 * 200 / 321 = 199.37
        let p = Placement::fit(321, 200).unwrap();
        assert_eq!((p.new_width, p.new_height), (320, 199));
        assert_eq!(p.y_offset, 0);

        // 200 * 320 / 201 = 318.4
        let p = Placement::fit(320, 201).unwrap();
        assert_eq!((p.new_width, p.new_height), (318, 200));
        assert_eq!(p.x_offset, 1);
    }

    #[test]
    fn test_fit_rejects_zero_dimensions() {
        assert_eq!(
            Placement::fit(0, 100),
            Err(PlacementError::ZeroDimension { width: 0, height: 100 })
        );
        assert_eq!(
            Placement::fit(100, 0),
            Err(PlacementError::ZeroDimension { width: 100, height: 0 })
        );
        assert!(Placement::fit(0, 0).is_err());
    }

    #[test]
    fn test_fit_extreme_aspect_is_empty() {
        let strip = Placement::fit(1000, 1).unwrap();
        assert_eq!((strip.new_width, strip.new_height), (320, 0));
        assert_eq!(strip.y_offset, 100);
        assert!(strip.is_empty());

        let pole = Placement::fit(1, 1000).unwrap();
        assert_eq!((pole.new_width, pole.new_height), (0, 200));
        assert!(pole.is_empty());

        assert!(!Placement::fit(640, 400).unwrap().is_empty());
    }

    #[test]
    fn test_contains_maps_to_source_coordinates() {
        let p = Placement::fit(100, 100).unwrap();

        assert_eq!(p.contains(59, 0), None);
        assert_eq!(p.contains(60, 0), Some((0, 0)));
        assert_eq!(p.contains(259, 199), Some((199, 199)));
        assert_eq!(p.contains(260, 199), None);
        assert_eq!(p.contains(100, 200), None);
    }
}
