use anyhow::Context;
use fast_image_resize as fir;
use image::{Rgb, RgbImage, imageops};
use tracing::debug;

use crate::error::Error;
use crate::processing::layout::{self, Placement, TARGET_HEIGHT, TARGET_WIDTH};

/// Fill for frame regions the resampled bitmap does not cover.
pub const FRAME_FILL: Rgb<u8> = Rgb([0, 0, 0]);

/// Fit `source` onto the 3840x2160 output frame.
///
/// The source is uniformly scaled until it covers the frame, resampled with a
/// Lanczos3 filter, then center-cropped. Padding onto a black canvas only
/// happens for a rounding near-miss of one axis. A source that is already
/// exactly frame-sized comes back as a plain copy with no resampling pass.
///
/// Every successful return is exactly 3840x2160; a zero-extent source is the
/// only rejected input.
pub fn fit_to_frame(source: &RgbImage) -> Result<RgbImage, Error> {
    let (src_w, src_h) = source.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(Error::ZeroExtent {
            width: src_w,
            height: src_h,
        });
    }
    if src_w == TARGET_WIDTH && src_h == TARGET_HEIGHT {
        return Ok(source.clone());
    }

    let plan = layout::plan_cover(src_w, src_h);
    debug!(
        src_w,
        src_h,
        scale = plan.scale,
        resized_w = plan.resized_w,
        resized_h = plan.resized_h,
        "fitting source onto frame"
    );

    let resized =
        resample(source, plan.resized_w, plan.resized_h).map_err(Error::Resample)?;
    Ok(place_on_frame(resized))
}

/// Place an already-resampled bitmap on the output frame.
pub fn place_on_frame(resized: RgbImage) -> RgbImage {
    match layout::placement_for(resized.width(), resized.height()) {
        Placement::Exact => resized,
        Placement::Crop { left, top } => {
            imageops::crop_imm(&resized, left, top, TARGET_WIDTH, TARGET_HEIGHT).to_image()
        }
        Placement::Pad { left, top } => {
            let mut canvas = RgbImage::from_pixel(TARGET_WIDTH, TARGET_HEIGHT, FRAME_FILL);
            imageops::overlay(&mut canvas, &resized, i64::from(left), i64::from(top));
            canvas
        }
    }
}

fn resample(source: &RgbImage, target_w: u32, target_h: u32) -> anyhow::Result<RgbImage> {
    let src_view = fir::images::ImageRef::new(
        source.width(),
        source.height(),
        source.as_raw(),
        fir::PixelType::U8x3,
    )
    .context("failed to create source view for resample")?;
    let mut dst_image = fir::images::Image::new(target_w, target_h, fir::PixelType::U8x3);
    let options = fir::ResizeOptions::new()
        .resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::Lanczos3));
    let mut resizer = fir::Resizer::new();
    resizer
        .resize(&src_view, &mut dst_image, Some(&options))
        .context("resample failed")?;
    RgbImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| anyhow::anyhow!("failed to construct resampled image"))
}
