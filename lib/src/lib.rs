//! glyphgrid - image to ASCII art converter
//!
//! Loads an image (or generates a gradient), resamples it to a character
//! grid with aspect correction, maps intensities onto an ordered palette,
//! and re-renders the text with a monospace glyph set.
//!
//! # Example
//! ```no_run
//! use glyphgrid::{ConversionConfig, Palette, Source, quantize};
//!
//! let gray = Source::Demo { size: 256 }.load().unwrap();
//! let config = ConversionConfig { width: 80, ..Default::default() };
//! let grid = quantize(&gray, &config).unwrap();
//! println!("{}", grid.to_text(&Palette::default()));
//! ```

pub mod bitmap;
pub mod config;
pub mod error;
pub mod filters;
pub mod font;
pub mod palette;
pub mod processor;
pub mod quantize;
pub mod render;
pub mod source;

// Re-export main types for convenience
pub use config::{ConversionConfig, MIN_WIDTH, RenderConfig};
pub use error::{AsciiError, Result};
pub use font::{FontSource, GlyphCell, GlyphFont, find_monospace_font};
pub use palette::{Palette, PalettePreset};
pub use processor::{Pipeline, PipelineOutput};
pub use quantize::{CharacterGrid, quantize};
pub use render::render_lines;
pub use source::Source;
