use image::{Rgb, RgbImage};
use log::debug;

use crate::config::RenderConfig;
use crate::error::{AsciiError, Result};
use crate::font::GlyphFont;

/// Largest canvas, in pixels, that will be allocated
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Render text lines to an RGB canvas on a fixed monospace grid
///
/// The canvas is `cols * cell.width` by `rows * cell.height`, where `cols`
/// is the longest line in characters. Character `c` of row `r` is drawn at
/// (c * cell.width, r * cell.height). An empty grid renders as a single blank
/// cell rather than a zero-area image.
///
/// Returns `CanvasTooLarge` when a side overflows or the pixel count exceeds
/// `MAX_CANVAS_PIXELS`.
///
/// # Arguments
/// * `lines` - Text rows, top to bottom
/// * `font` - Loaded glyph set
/// * `config` - Colors (font settings are already applied to `font`)
pub fn render_lines(lines: &[String], font: &GlyphFont, config: &RenderConfig) -> Result<RgbImage> {
    let cell = font.cell_size();

    let mut rows = lines.len() as u32;
    let mut cols = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u32;

    // Avoid zero-size images
    let single_blank = [String::new()];
    let lines = if rows == 0 || cols == 0 {
        rows = 1;
        cols = 1;
        &single_blank[..]
    } else {
        lines
    };

    let too_large = || AsciiError::CanvasTooLarge {
        cols,
        rows,
        cell_width: cell.width,
        cell_height: cell.height,
    };
    let width = cols
        .checked_mul(cell.width)
        .filter(|&w| w <= i32::MAX as u32)
        .ok_or_else(too_large)?
        .max(1);
    let height = rows
        .checked_mul(cell.height)
        .filter(|&h| h <= i32::MAX as u32)
        .ok_or_else(too_large)?
        .max(1);
    if u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS {
        return Err(too_large());
    }
    debug!(
        "rendering {}x{} characters with {}x{} cells -> {}x{} px",
        cols, rows, cell.width, cell.height, width, height
    );

    let fg = Rgb(config.fg_color);
    let mut canvas = RgbImage::from_pixel(width, height, Rgb(config.bg_color));

    for (row, line) in lines.iter().enumerate() {
        let y = (row as u32 * cell.height) as i32;
        for (col, ch) in line.chars().enumerate() {
            let x = (col as u32 * cell.width) as i32;
            font.draw_char(&mut canvas, ch, x, y, fg);
        }
    }

    Ok(canvas)
}
