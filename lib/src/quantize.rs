use std::path::Path;

use image::GrayImage;
use log::{debug, info};
use rayon::prelude::*;

use crate::config::ConversionConfig;
use crate::error::{AsciiError, Result};
use crate::filters::resample;
use crate::palette::Palette;

/// Map one intensity to a palette index
///
/// index = round((1 - v/255) * (levels - 1)), so black lands on the heaviest
/// character. `invert` replaces v with 255 - v first.
///
/// Computed in integers: (255 - v) * (levels - 1) / 255 never has a
/// fractional part of exactly one half, so inverted indices mirror exactly.
///
/// # Arguments
/// * `value` - Pixel intensity [0, 255]
/// * `levels` - Palette length (>= 1)
/// * `invert` - Whether to invert the intensity mapping
pub fn intensity_to_index(value: u8, levels: usize, invert: bool) -> usize {
    if levels <= 1 {
        return 0;
    }

    let value = if invert { 255 - value } else { value };
    let weight = (255 - value) as usize;
    let index = (weight * (levels - 1) * 2 + 255) / 510;

    index.min(levels - 1)
}

/// A grid of palette indices, one row per text line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterGrid {
    cols: u32,
    rows: u32,
    indices: Vec<usize>,
}

impl CharacterGrid {
    /// Quantize every pixel of an already resampled grid
    pub fn from_pixels(gray: &GrayImage, levels: usize, invert: bool) -> Self {
        let (cols, rows) = gray.dimensions();

        // Parallelize per-pixel quantization
        let indices = gray
            .as_raw()
            .par_iter()
            .map(|&v| intensity_to_index(v, levels, invert))
            .collect();

        Self {
            cols,
            rows,
            indices,
        }
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Palette index at column `x`, row `y`
    pub fn index_at(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.indices.get(y as usize * self.cols as usize + x as usize).copied()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Render each row as a string of palette characters
    pub fn to_lines(&self, palette: &Palette) -> Vec<String> {
        if self.cols == 0 {
            return vec![String::new(); self.rows as usize];
        }
        self.indices
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|&i| palette.char_at(i)).collect())
            .collect()
    }

    /// Rows joined by newlines, without a trailing newline
    pub fn to_text(&self, palette: &Palette) -> String {
        self.to_lines(palette).join("\n")
    }
}

/// Resample and quantize a grayscale grid in one step
///
/// Pipeline:
/// 1. Validate the configuration (width, scale, palette)
/// 2. Resize to `width` columns with aspect-corrected height
/// 3. Map each pixel to a palette index
pub fn quantize(gray: &GrayImage, config: &ConversionConfig) -> Result<CharacterGrid> {
    config.validate()?;

    let resized = resample(gray, config.width, config.scale_y)?;
    let grid = CharacterGrid::from_pixels(&resized, config.palette.len(), config.invert);
    debug!(
        "quantized to {}x{} over {} levels (invert: {})",
        grid.cols(),
        grid.rows(),
        config.palette.len(),
        config.invert
    );

    Ok(grid)
}

/// Write text lines to `path` as UTF-8, creating parent directories
pub fn write_text(lines: &[String], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AsciiError::io(parent, e))?;
    }
    std::fs::write(path, lines.join("\n")).map_err(|e| AsciiError::io(path, e))?;
    info!("wrote {} lines of text to {}", lines.len(), path.display());
    Ok(())
}
