//! Pixel sources: decoded image files or a generated gradient

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use log::{debug, info};

use crate::error::{AsciiError, Result};
use crate::filters::calculate_luminance;

/// Side length of the generated demo gradient
pub const DEMO_SIZE: u32 = 256;

/// Where the pixel grid comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Demo { size: u32 },
}

impl Source {
    /// Pick a source from the optional input path and demo flag
    ///
    /// The demo flag wins when both are given.
    pub fn resolve(input: Option<&Path>, demo: bool, demo_size: u32) -> Result<Self> {
        if demo {
            return Ok(Source::Demo { size: demo_size });
        }
        match input {
            Some(path) if path.exists() => Ok(Source::File(path.to_path_buf())),
            Some(path) => Err(AsciiError::InputNotFound(path.to_path_buf())),
            None => Err(AsciiError::NoInput),
        }
    }

    /// Base name used for default output files
    pub fn stem(&self) -> String {
        match self {
            Source::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string()),
            Source::Demo { .. } => "demo".to_string(),
        }
    }

    /// Produce the grayscale pixel grid
    pub fn load(&self) -> Result<GrayImage> {
        match self {
            Source::File(path) => {
                if !path.exists() {
                    return Err(AsciiError::InputNotFound(path.clone()));
                }
                let img = image::ImageReader::open(path)
                    .map_err(|e| AsciiError::io(path, e))?
                    .with_guessed_format()
                    .map_err(|e| AsciiError::io(path, e))?
                    .decode()?;
                debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());
                Ok(calculate_luminance(&img))
            }
            Source::Demo { size } => Ok(demo_gradient(*size)),
        }
    }
}

/// Generate a diagonal gradient demo grid
///
/// Intensity rises left to right (60%) and top to bottom (40%):
/// val = floor(255 * (x/(size-1) * 0.6 + y/(size-1) * 0.4))
pub fn demo_gradient(size: u32) -> GrayImage {
    let size = size.max(1);
    let span = (size - 1).max(1) as f64;

    GrayImage::from_fn(size, size, |x, y| {
        let val = 255.0 * (x as f64 / span * 0.6 + y as f64 / span * 0.4);
        Luma([val.clamp(0.0, 255.0) as u8])
    })
}

/// Save a gradient as PNG, creating parent directories
pub fn save_demo(grid: &GrayImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AsciiError::io(parent, e))?;
    }
    grid.save(path)?;
    info!("demo gradient saved to {}", path.display());
    Ok(())
}
