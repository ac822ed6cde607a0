use std::path::PathBuf;

/// Errors produced by the conversion pipeline
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("width {width} is too small (minimum {min}); try >= 40, ideally 80-200")]
    WidthTooSmall { width: u32, min: u32 },

    #[error("vertical scale must be a positive finite number, got {0}")]
    InvalidScale(f32),

    #[error("character palette must contain at least one character")]
    EmptyPalette,

    #[error("font size must be in (0, {max}], got {size}")]
    InvalidFontSize { size: f32, max: f32 },

    #[error("rendered canvas too large: {cols}x{rows} cells of {cell_width}x{cell_height} px")]
    CanvasTooLarge {
        cols: u32,
        rows: u32,
        cell_width: u32,
        cell_height: u32,
    },

    #[error("source image has zero area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("no input given: provide --input <path> or use --demo")]
    NoInput,

    #[error("input image not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid font data: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AsciiError {
    /// Wraps an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AsciiError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by invalid configuration values
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AsciiError::WidthTooSmall { .. }
                | AsciiError::InvalidScale(_)
                | AsciiError::EmptyPalette
                | AsciiError::InvalidFontSize { .. }
                | AsciiError::CanvasTooLarge { .. }
        )
    }

    /// True when the run had nothing to read from
    pub fn is_missing_input(&self) -> bool {
        matches!(self, AsciiError::NoInput | AsciiError::InputNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, AsciiError>;
