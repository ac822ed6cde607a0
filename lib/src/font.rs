//! Monospace font discovery with fallback
//!
//! Candidates are tried in order: the requested path, well-known system
//! monospace fonts, then the built-in bitmap font which cannot fail.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use log::{debug, info};

use crate::bitmap::BitmapFont;
use crate::error::{AsciiError, Result};

/// Well-known monospace font files, most preferred first
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    // Windows: Consolas, Courier New, Lucida Console
    r"C:\Windows\Fonts\consola.ttf",
    r"C:\Windows\Fonts\cour.ttf",
    r"C:\Windows\Fonts\lucon.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Menlo.ttc",
    "/Library/Fonts/Courier New.ttf",
];

/// Width and height in pixels of one monospace character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    pub width: u32,
    pub height: u32,
}

/// One entry of the fallback chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

impl FontSource {
    /// Load this source at `size` pixels
    pub fn load(&self, size: f32) -> Result<GlyphFont> {
        match self {
            FontSource::File(path) => {
                let data = std::fs::read(path).map_err(|e| AsciiError::io(path, e))?;
                let font = FontVec::try_from_vec(data)?;
                Ok(GlyphFont::Outline {
                    font,
                    scale: PxScale::from(size),
                    path: path.clone(),
                })
            }
            FontSource::Builtin => Ok(GlyphFont::Bitmap(BitmapFont::for_size(size))),
        }
    }
}

/// Build the ordered candidate list for an optional user font
pub fn candidate_sources(requested: Option<&Path>) -> Vec<FontSource> {
    let mut sources = Vec::with_capacity(SYSTEM_FONT_CANDIDATES.len() + 2);
    if let Some(path) = requested {
        sources.push(FontSource::File(path.to_path_buf()));
    }
    sources.extend(
        SYSTEM_FONT_CANDIDATES
            .iter()
            .map(|p| FontSource::File(PathBuf::from(p))),
    );
    sources.push(FontSource::Builtin);
    sources
}

/// Return the first source that loads, or the built-in font
///
/// Missing or unparsable fonts are skipped without error.
pub fn load_first(sources: &[FontSource], size: f32) -> GlyphFont {
    for source in sources {
        if matches!(source, FontSource::File(path) if !path.exists()) {
            continue;
        }
        match source.load(size) {
            Ok(font) => {
                info!("using font: {}", font.describe());
                return font;
            }
            Err(e) => debug!("skipping font {:?}: {}", source, e),
        }
    }

    info!("using font: built-in bitmap");
    GlyphFont::Bitmap(BitmapFont::for_size(size))
}

/// Resolve the font for a run: requested path, system fonts, built-in
pub fn find_monospace_font(requested: Option<&Path>, size: f32) -> GlyphFont {
    load_first(&candidate_sources(requested), size)
}

/// A loaded glyph set able to measure and draw single characters
pub enum GlyphFont {
    Outline {
        font: FontVec,
        scale: PxScale,
        path: PathBuf,
    },
    Bitmap(BitmapFont),
}

impl GlyphFont {
    /// Measure one character cell
    ///
    /// Outline fonts use the advance of 'A' for the width and
    /// ascent - descent for the height, both rounded up and at least 1.
    pub fn cell_size(&self) -> GlyphCell {
        match self {
            GlyphFont::Outline { font, scale, .. } => {
                let scaled = font.as_scaled(*scale);
                let advance = scaled.h_advance(font.glyph_id('A'));
                let height = scaled.ascent() - scaled.descent();
                GlyphCell {
                    width: (advance.ceil() as u32).max(1),
                    height: (height.ceil() as u32).max(1),
                }
            }
            GlyphFont::Bitmap(bitmap) => {
                let (width, height) = bitmap.cell_size();
                GlyphCell { width, height }
            }
        }
    }

    /// Draw `ch` with the top-left of its cell at (x, y)
    pub fn draw_char(&self, canvas: &mut RgbImage, ch: char, x: i32, y: i32, color: Rgb<u8>) {
        if ch.is_whitespace() {
            return;
        }
        match self {
            GlyphFont::Outline { font, scale, .. } => {
                let mut buf = [0u8; 4];
                draw_text_mut(canvas, color, x, y, *scale, font, ch.encode_utf8(&mut buf));
            }
            GlyphFont::Bitmap(bitmap) => bitmap.draw_char(canvas, ch, x, y, color),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, GlyphFont::Bitmap(_))
    }

    /// Short human readable name for logs
    pub fn describe(&self) -> String {
        match self {
            GlyphFont::Outline { path, scale, .. } => {
                format!("{} @ {}px", path.display(), scale.y)
            }
            GlyphFont::Bitmap(bitmap) => format!("built-in bitmap x{}", bitmap.scale()),
        }
    }
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GlyphFont({})", self.describe())
    }
}
