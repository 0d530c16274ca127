use image::{DynamicImage, RgbImage, RgbaImage};

/// Collapse any decoded color mode to 8-bit RGB.
///
/// Opaque modes (grayscale, RGB, and their wide variants) convert
/// channel-wise. Modes carrying an alpha channel are composited against
/// opaque black: a pixel at alpha `a` keeps `channel * a / 255` of its value,
/// so fully transparent regions come out black. Dimensions are preserved.
pub fn to_rgb(image: &DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb.clone(),
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgb32F(_) => image.to_rgb8(),
        _ => flatten_rgba(&image.to_rgba8()),
    }
}

fn flatten_rgba(image: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());
    for (src, dst) in image.pixels().zip(out.pixels_mut()) {
        let alpha = u32::from(src[3]);
        for c in 0..3 {
            dst[c] = ((u32::from(src[c]) * alpha + 127) / 255) as u8;
        }
    }
    out
}
