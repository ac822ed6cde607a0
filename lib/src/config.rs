use std::path::PathBuf;

use crate::error::{AsciiError, Result};
use crate::palette::Palette;

/// Smallest target width that still produces a meaningful picture
pub const MIN_WIDTH: u32 = 10;

/// Largest accepted font size in pixels
pub const MAX_FONT_SIZE: f32 = 1024.0;

/// Configuration for image to character-grid conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Target width in characters
    pub width: u32,           // >= MIN_WIDTH, default 120
    /// Vertical scale compensating for tall glyphs
    pub scale_y: f32,         // typical 0.45-0.6, default 0.5
    pub palette: Palette,     // default dense ramp
    pub invert: bool,         // default false
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            width: 120,
            scale_y: 0.5,
            palette: Palette::default(),
            invert: false,
        }
    }
}

impl ConversionConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH {
            return Err(AsciiError::WidthTooSmall {
                width: self.width,
                min: MIN_WIDTH,
            });
        }
        if !self.scale_y.is_finite() || self.scale_y <= 0.0 {
            return Err(AsciiError::InvalidScale(self.scale_y));
        }
        Ok(())
    }
}

/// Configuration for re-rendering the character grid as a bitmap
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Preferred font file, tried before the platform defaults
    pub font_path: Option<PathBuf>,
    pub font_size: f32,       // pixels, (0, MAX_FONT_SIZE], default 14
    pub fg_color: [u8; 3],    // RGB, default black
    pub bg_color: [u8; 3],    // RGB, default white
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            font_size: 14.0,
            fg_color: [0, 0, 0],
            bg_color: [255, 255, 255],
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 || self.font_size > MAX_FONT_SIZE {
            return Err(AsciiError::InvalidFontSize {
                size: self.font_size,
                max: MAX_FONT_SIZE,
            });
        }
        Ok(())
    }
}
