use std::io;
use std::path::PathBuf;

use thiserror::Error;
use vga_framebuffer::PlacementError;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to open image {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid image")]
    EmptyImage(#[from] PlacementError),

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
