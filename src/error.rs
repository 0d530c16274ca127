use std::path::PathBuf;

use thiserror::Error;

/// Library error type for frame-fitting operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Source bitmap has zero width or height; nothing can be fitted.
    #[error("source image has zero extent ({width}x{height})")]
    ZeroExtent { width: u32, height: u32 },

    /// The input file could not be decoded as a supported image.
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The fitted frame could not be serialized to the output file.
    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure inside the resize backend.
    #[error("resample failed: {0}")]
    Resample(anyhow::Error),
}
