//! Character palettes
//!
//! A palette is an ordered ramp of characters from the lightest visual weight
//! (index 0, usually a space) to the heaviest (last index).

use crate::error::{AsciiError, Result};

/// Classic 10-level ramp
pub const DENSE_CHARS: &str = " .:-=+*#%@";

/// Unicode shade blocks (5 levels)
pub const BLOCK_CHARS: &str = " ░▒▓█";

/// Shorter ramp without the two heaviest glyphs (8 levels)
pub const SIMPLE_CHARS: &str = " .:-=+*#";

/// Dots of increasing size (5 levels)
pub const DOT_CHARS: &str = " .·:•";

/// Named palette presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PalettePreset {
    #[default]
    Dense,
    Blocks,
    Simple,
    Dots,
}

impl PalettePreset {
    pub const ALL: [PalettePreset; 4] = [
        PalettePreset::Dense,
        PalettePreset::Blocks,
        PalettePreset::Simple,
        PalettePreset::Dots,
    ];

    /// Characters of this preset, lightest first
    pub fn chars(&self) -> &'static str {
        match self {
            PalettePreset::Dense => DENSE_CHARS,
            PalettePreset::Blocks => BLOCK_CHARS,
            PalettePreset::Simple => SIMPLE_CHARS,
            PalettePreset::Dots => DOT_CHARS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PalettePreset::Dense => "dense",
            PalettePreset::Blocks => "blocks",
            PalettePreset::Simple => "simple",
            PalettePreset::Dots => "dots",
        }
    }

    /// Look up a preset by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// An ordered, non-empty character ramp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Build a palette from characters ordered lightest to heaviest
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(AsciiError::EmptyPalette);
        }
        Ok(Self { chars })
    }

    /// Parse a palette from a string, one character per level
    pub fn from_str_chars(s: &str) -> Result<Self> {
        Self::new(s.chars())
    }

    /// Number of levels in the ramp (always >= 1)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never true; palettes are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, clamped to the heaviest character
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }

    pub fn lightest(&self) -> char {
        self.chars[0]
    }

    pub fn heaviest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Palette {
    fn default() -> Self {
        PalettePreset::default().into()
    }
}

impl From<PalettePreset> for Palette {
    fn from(preset: PalettePreset) -> Self {
        Self {
            chars: preset.chars().chars().collect(),
        }
    }
}
