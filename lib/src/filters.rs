use image::{DynamicImage, GrayImage, Luma, imageops};
use log::debug;

use crate::error::{AsciiError, Result};

/// Calculate luminance from any decoded image
///
/// Formula: L = 0.299*R + 0.587*G + 0.114*B (ITU-R 601), in 16-bit
/// fixed point with rounding. Alpha is ignored.
pub fn calculate_luminance(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut output = GrayImage::new(width, height);
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let l = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
        output.put_pixel(x, y, Luma([l.min(255) as u8]));
    }

    output
}

/// Rows produced when scaling a `src_width`x`src_height` grid to `width` columns
///
/// H = round(H0 * (W / W0) * scale_y), never less than 1
pub fn target_height(src_width: u32, src_height: u32, width: u32, scale_y: f32) -> u32 {
    let ratio = width as f64 / src_width as f64;
    let rows = (src_height as f64 * ratio * scale_y as f64).round();
    (rows as u32).max(1)
}

/// Resize a grayscale grid to `width` columns with aspect correction
///
/// Uses Catmull-Rom (bicubic) interpolation.
///
/// # Arguments
/// * `gray` - Source grid, must have non-zero area
/// * `width` - Target column count
/// * `scale_y` - Vertical scale factor (0.45-0.6 typical)
pub fn resample(gray: &GrayImage, width: u32, scale_y: f32) -> Result<GrayImage> {
    let (w0, h0) = gray.dimensions();
    if w0 == 0 || h0 == 0 {
        return Err(AsciiError::EmptyImage {
            width: w0,
            height: h0,
        });
    }

    let height = target_height(w0, h0, width, scale_y);
    debug!("resampling {}x{} -> {}x{} (scale_y {})", w0, h0, width, height, scale_y);

    Ok(imageops::resize(
        gray,
        width,
        height,
        imageops::FilterType::CatmullRom,
    ))
}
