//! File-level pipeline: decode, fit onto the frame, write lossless output.

use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use tracing::info;

use crate::error::Error;
use crate::processing::{fit, normalize};

/// Fit a decoded image onto the output frame.
pub fn fit_image(image: &DynamicImage) -> Result<RgbImage, Error> {
    fit::fit_to_frame(&normalize::to_rgb(image))
}

/// Decode `input`, fit it onto the frame, and write the result to `output`.
///
/// The output is always encoded as PNG regardless of the extension on
/// `output`; parent directories are created as needed.
pub fn fit_file(input: &Path, output: &Path) -> Result<(), Error> {
    let reader = ImageReader::open(input)?.with_guessed_format()?;
    let decoded = reader.decode().map_err(|source| Error::Decode {
        path: input.to_path_buf(),
        source,
    })?;

    let fitted = fit_image(&decoded)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fitted
        .save_with_format(output, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        "wrote fitted frame"
    );
    Ok(())
}
