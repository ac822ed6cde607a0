//! Built-in bitmap glyphs
//!
//! Simple 8x8 patterns for every preset palette character, stretched to an
//! 8x16 cell so the glyphs keep the usual 1:2 monospace aspect. Always
//! available, so it terminates every font fallback chain.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Unscaled cell width in pixels
pub const CELL_WIDTH: u32 = 8;
/// Unscaled cell height in pixels
pub const CELL_HEIGHT: u32 = 16;
/// Largest integer scale factor
pub const MAX_SCALE: u32 = 64;

/// Bitmap font scaled by an integer factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.clamp(1, MAX_SCALE),
        }
    }

    /// Pick the integer scale closest to a requested pixel size
    pub fn for_size(size: f32) -> Self {
        let scale = (size / CELL_HEIGHT as f32).round();
        Self::new(if scale.is_finite() { scale as u32 } else { 1 })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Cell (width, height) in pixels
    pub fn cell_size(&self) -> (u32, u32) {
        (CELL_WIDTH * self.scale, CELL_HEIGHT * self.scale)
    }

    /// Draw `ch` with its top-left corner at (x, y)
    pub fn draw_char(&self, canvas: &mut RgbImage, ch: char, x: i32, y: i32, color: Rgb<u8>) {
        let s = self.scale;
        for gy in 0..CELL_HEIGHT {
            for gx in 0..CELL_WIDTH {
                // Each pattern row covers two pixel rows
                if !should_draw_pixel(ch, gx, gy / 2) {
                    continue;
                }
                let px = x.saturating_add((gx * s) as i32);
                let py = y.saturating_add((gy * s) as i32);
                let rect = Rect::at(px, py).of_size(s, s);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Whether the 8x8 pattern for `ch` is set at (x, y)
///
/// Unknown characters draw a filled square; whitespace draws nothing.
pub fn should_draw_pixel(ch: char, x: u32, y: u32) -> bool {
    match ch {
        c if c.is_whitespace() => false,

        '|' => x == 3 || x == 4,

        '-' => y == 3 || y == 4,

        '/' => {
            let expected_x = 7 - y;
            x == expected_x || x == expected_x.saturating_sub(1)
        }

        '\\' => x == y || x == y.saturating_sub(1),

        '.' => (3..=4).contains(&x) && y == 6,

        '·' => (3..=4).contains(&x) && (3..=4).contains(&y),

        ':' => (3..=4).contains(&x) && (y == 2 || y == 5),

        '=' => y == 2 || y == 5,

        '+' => {
            let stem = (x == 3 || x == 4) && (1..=6).contains(&y);
            let bar = (y == 3 || y == 4) && (1..=6).contains(&x);
            stem || bar
        }

        '*' => {
            let inner = (1..=6).contains(&x) && (1..=6).contains(&y);
            inner && ((x == 3 || x == 4) || (y == 3 || y == 4) || x == y || x == 7 - y)
        }

        '#' => (x == 2 || x == 5) || (y == 2 || y == 5),

        '%' => {
            let slash = x + y == 7;
            let dots = ((1..=2).contains(&x) && (1..=2).contains(&y))
                || ((5..=6).contains(&x) && (5..=6).contains(&y));
            slash || dots
        }

        '@' => {
            let dx = x as i32 - 3;
            let dy = y as i32 - 3;
            dx * dx + dy * dy <= 12
        }

        '•' => {
            let dx = x as i32 * 2 - 7;
            let dy = y as i32 * 2 - 7;
            dx * dx + dy * dy <= 20
        }

        // Shade blocks, lightest to full
        '░' => x % 2 == 0 && y % 2 == 0,
        '▒' => (x + y) % 2 == 0,
        '▓' => !(x % 2 == 1 && y % 2 == 1),
        '█' => true,

        _ => true,
    }
}
