//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glyphgrid::source::DEMO_SIZE;
use glyphgrid::{
    AsciiError, ConversionConfig, Palette, PalettePreset, Pipeline, RenderConfig, Source,
};

/// Convert images to ASCII art (.txt) and render the text back to an image
#[derive(Parser, Debug)]
#[command(name = "glyphgrid")]
#[command(version, about = "Convert images to ASCII art (.txt and rendered .png)", long_about = None)]
pub struct Args {
    /// Path to input image (png/jpg/webp). Omit with --demo
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Generate and use a demo gradient image
    #[arg(long)]
    pub demo: bool,

    /// Side length of the demo gradient
    #[arg(long, default_value_t = DEMO_SIZE)]
    pub demo_size: u32,

    /// Also save the demo gradient to this path
    #[arg(long)]
    pub save_demo: Option<PathBuf>,

    /// Target character width (80-200 looks good)
    #[arg(short, long, default_value_t = 120)]
    pub width: u32,

    /// Invert brightness mapping
    #[arg(long)]
    pub invert: bool,

    /// Character set to use
    #[arg(long, default_value = "dense")]
    pub charset: CharsetArg,

    /// Custom palette, lightest character first (overrides --charset)
    #[arg(long)]
    pub chars: Option<String>,

    /// Height scaling factor for character aspect compensation (0.45-0.6)
    #[arg(long, default_value_t = 0.5)]
    pub scale_y: f32,

    /// Output .txt path (default: out/<name>_<width>.txt)
    #[arg(long)]
    pub out_text: Option<PathBuf>,

    /// Output image path (default: out/<name>_<width>.png)
    #[arg(long)]
    pub out_image: Option<PathBuf>,

    /// Path to a .ttf monospace font
    #[arg(long)]
    pub font_path: Option<PathBuf>,

    /// Font size in pixels for the rendered image
    #[arg(long, default_value_t = 14.0)]
    pub font_size: f32,

    /// Glyph color as #rrggbb
    #[arg(long, default_value = "#000000", value_parser = parse_hex_color)]
    pub fg: [u8; 3],

    /// Background color as #rrggbb
    #[arg(long, default_value = "#ffffff", value_parser = parse_hex_color)]
    pub bg: [u8; 3],

    /// Also print the ASCII art to stdout
    #[arg(long)]
    pub print: bool,
}

/// Named palette presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CharsetArg {
    /// " .:-=+*#%@"
    Dense,
    /// Unicode shade blocks
    Blocks,
    /// " .:-=+*#"
    Simple,
    /// Dots of increasing size
    Dots,
}

impl From<CharsetArg> for PalettePreset {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Dense => PalettePreset::Dense,
            CharsetArg::Blocks => PalettePreset::Blocks,
            CharsetArg::Simple => PalettePreset::Simple,
            CharsetArg::Dots => PalettePreset::Dots,
        }
    }
}

/// Parse a `#rrggbb` (or `rrggbb`) color
fn parse_hex_color(s: &str) -> Result<[u8; 3], String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{}' is not a #rrggbb color", s));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("'{}': {}", s, e))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

impl Args {
    /// Palette selected by --chars or --charset
    pub fn palette(&self) -> Result<Palette, AsciiError> {
        match &self.chars {
            Some(chars) => Palette::from_str_chars(chars),
            None => Ok(PalettePreset::from(self.charset).into()),
        }
    }

    /// Build the pipeline described by these arguments
    pub fn to_pipeline(&self) -> Result<Pipeline, AsciiError> {
        let source = Source::resolve(self.input.as_deref(), self.demo, self.demo_size)?;

        let mut pipeline = Pipeline::new(source);
        pipeline.conversion = ConversionConfig {
            width: self.width,
            scale_y: self.scale_y,
            palette: self.palette()?,
            invert: self.invert,
        };
        pipeline.render = RenderConfig {
            font_path: self.font_path.clone(),
            font_size: self.font_size,
            fg_color: self.fg,
            bg_color: self.bg,
        };
        pipeline.out_text = self.out_text.clone();
        pipeline.out_image = self.out_image.clone();
        pipeline.save_demo = self.save_demo.clone();
        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["glyphgrid"]);
        assert!(args.input.is_none());
        assert!(!args.demo);
        assert_eq!(args.demo_size, 256);
        assert_eq!(args.width, 120);
        assert!(!args.invert);
        assert_eq!(args.charset, CharsetArg::Dense);
        assert!(args.chars.is_none());
        assert_eq!(args.scale_y, 0.5);
        assert!(args.out_text.is_none());
        assert!(args.out_image.is_none());
        assert!(args.font_path.is_none());
        assert_eq!(args.font_size, 14.0);
        assert_eq!(args.fg, [0, 0, 0]);
        assert_eq!(args.bg, [255, 255, 255]);
        assert!(!args.print);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["glyphgrid", "-i", "cat.jpg", "-w", "80"]);
        assert_eq!(args.input, Some(PathBuf::from("cat.jpg")));
        assert_eq!(args.width, 80);
    }

    #[test]
    fn test_args_charset_values() {
        let args = Args::parse_from(["glyphgrid", "--charset", "blocks"]);
        assert_eq!(args.charset, CharsetArg::Blocks);

        let args = Args::parse_from(["glyphgrid", "--charset", "simple"]);
        assert_eq!(args.charset, CharsetArg::Simple);

        let args = Args::parse_from(["glyphgrid", "--charset", "dots"]);
        assert_eq!(args.charset, CharsetArg::Dots);

        assert!(Args::try_parse_from(["glyphgrid", "--charset", "braille"]).is_err());
    }

    #[test]
    fn test_args_combined_options() {
        let args = Args::parse_from([
            "glyphgrid",
            "--demo",
            "--width",
            "100",
            "--invert",
            "--scale-y",
            "0.55",
            "--out-text",
            "a.txt",
            "--out-image",
            "a.png",
            "--font-path",
            "mono.ttf",
            "--font-size",
            "18",
            "--fg",
            "#ff8000",
            "--bg",
            "102030",
            "--print",
        ]);
        assert!(args.demo);
        assert_eq!(args.width, 100);
        assert!(args.invert);
        assert_eq!(args.scale_y, 0.55);
        assert_eq!(args.out_text, Some(PathBuf::from("a.txt")));
        assert_eq!(args.out_image, Some(PathBuf::from("a.png")));
        assert_eq!(args.font_path, Some(PathBuf::from("mono.ttf")));
        assert_eq!(args.font_size, 18.0);
        assert_eq!(args.fg, [255, 128, 0]);
        assert_eq!(args.bg, [16, 32, 48]);
        assert!(args.print);
    }

    #[test]
    fn test_parse_hex_color_rejects_bad_input() {
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_palette_selection() {
        let args = Args::parse_from(["glyphgrid", "--charset", "blocks"]);
        assert_eq!(args.palette().unwrap().heaviest(), '█');

        let args = Args::parse_from(["glyphgrid", "--charset", "blocks", "--chars", " o0"]);
        assert_eq!(args.palette().unwrap().chars(), &[' ', 'o', '0']);

        let args = Args::parse_from(["glyphgrid", "--chars", ""]);
        assert!(args.palette().unwrap_err().is_config_error());
    }

    #[test]
    fn test_to_pipeline_without_input() {
        let args = Args::parse_from(["glyphgrid"]);
        let err = args.to_pipeline().unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_to_pipeline_demo() {
        let args = Args::parse_from(["glyphgrid", "--demo", "-w", "64", "--invert"]);
        let pipeline = args.to_pipeline().unwrap();
        assert_eq!(pipeline.source, Source::Demo { size: 256 });
        assert_eq!(pipeline.conversion.width, 64);
        assert!(pipeline.conversion.invert);
        let (text, image) = pipeline.output_paths();
        assert_eq!(text, PathBuf::from("out/demo_64.txt"));
        assert_eq!(image, PathBuf::from("out/demo_64.png"));
    }
}
