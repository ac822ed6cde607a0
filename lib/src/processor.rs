use std::path::{Path, PathBuf};

use image::RgbImage;
use log::info;

use crate::config::{ConversionConfig, RenderConfig};
use crate::error::{AsciiError, Result};
use crate::font::find_monospace_font;
use crate::palette::Palette;
use crate::quantize::{CharacterGrid, quantize, write_text};
use crate::render::render_lines;
use crate::source::{Source, save_demo};

/// Directory used when output paths are not given
pub const DEFAULT_OUT_DIR: &str = "out";

/// Default `<dir>/<stem>_<width>.<ext>` output path
pub fn default_output_path(dir: &Path, stem: &str, width: u32, ext: &str) -> PathBuf {
    dir.join(format!("{stem}_{width}.{ext}"))
}

/// Everything a single run needs
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub source: Source,
    pub conversion: ConversionConfig,
    pub render: RenderConfig,
    /// Text output; defaults to `out/<stem>_<width>.txt`
    pub out_text: Option<PathBuf>,
    /// Bitmap output; defaults to `out/<stem>_<width>.png`
    pub out_image: Option<PathBuf>,
    /// Also write the generated demo gradient here
    pub save_demo: Option<PathBuf>,
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub text_path: PathBuf,
    pub image_path: PathBuf,
    pub text: String,
    pub cols: u32,
    pub rows: u32,
}

impl Pipeline {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            conversion: ConversionConfig::default(),
            render: RenderConfig::default(),
            out_text: None,
            out_image: None,
            save_demo: None,
        }
    }

    /// Resolved text and image output paths
    pub fn output_paths(&self) -> (PathBuf, PathBuf) {
        let stem = self.source.stem();
        let dir = Path::new(DEFAULT_OUT_DIR);
        let width = self.conversion.width;

        let text = self
            .out_text
            .clone()
            .unwrap_or_else(|| default_output_path(dir, &stem, width, "txt"));
        let image = self
            .out_image
            .clone()
            .unwrap_or_else(|| default_output_path(dir, &stem, width, "png"));
        (text, image)
    }

    /// Runs the full pipeline:
    /// 1. Validate both configurations
    /// 2. Load or generate the pixel grid
    /// 3. Resample and quantize to a character grid
    /// 4. Write the text file
    /// 5. Pick a font through the fallback chain
    /// 6. Render the text grid and save the bitmap
    pub fn run(&self) -> Result<PipelineOutput> {
        self.conversion.validate()?;
        self.render.validate()?;

        let gray = self.source.load()?;
        if let (Source::Demo { .. }, Some(path)) = (&self.source, &self.save_demo) {
            save_demo(&gray, path)?;
        }

        let grid = quantize(&gray, &self.conversion)?;
        let lines = grid.to_lines(&self.conversion.palette);

        let (text_path, image_path) = self.output_paths();
        write_text(&lines, &text_path)?;

        let image = render_grid_lines(&lines, &self.render)?;
        save_image(&image, &image_path)?;

        Ok(PipelineOutput {
            text_path,
            image_path,
            text: lines.join("\n"),
            cols: grid.cols(),
            rows: grid.rows(),
        })
    }
}

/// Render text lines with the font chosen by the render configuration
pub fn render_grid_lines(lines: &[String], config: &RenderConfig) -> Result<RgbImage> {
    let font = find_monospace_font(config.font_path.as_deref(), config.font_size);
    render_lines(lines, &font, config)
}

/// Render a character grid with the given palette and render configuration
pub fn render_grid(
    grid: &CharacterGrid,
    palette: &Palette,
    config: &RenderConfig,
) -> Result<RgbImage> {
    render_grid_lines(&grid.to_lines(palette), config)
}

/// Save a bitmap, creating parent directories; format follows the extension
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AsciiError::io(parent, e))?;
    }
    image.save(path)?;
    info!(
        "saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PalettePreset;

    fn demo_pipeline(dir: &Path, width: u32) -> Pipeline {
        let mut pipeline = Pipeline::new(Source::Demo { size: 64 });
        pipeline.conversion.width = width;
        pipeline.render.font_path = Some(dir.join("no-such-font.ttf"));
        pipeline.out_text = Some(dir.join("art.txt"));
        pipeline.out_image = Some(dir.join("art.png"));
        pipeline
    }

    #[test]
    fn test_default_output_paths() {
        let mut pipeline = Pipeline::new(Source::File(PathBuf::from("photos/cat.jpg")));
        pipeline.conversion.width = 80;
        let (text, image) = pipeline.output_paths();
        assert_eq!(text, PathBuf::from("out/cat_80.txt"));
        assert_eq!(image, PathBuf::from("out/cat_80.png"));

        let pipeline = Pipeline::new(Source::Demo { size: 256 });
        let (text, _) = pipeline.output_paths();
        assert_eq!(text, PathBuf::from("out/demo_120.txt"));
    }

    #[test]
    fn test_run_writes_both_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let output = demo_pipeline(dir.path(), 20).run().unwrap();

        // 64 * (20/64) * 0.5 = 10
        assert_eq!((output.cols, output.rows), (20, 10));

        let text = std::fs::read_to_string(&output.text_path).unwrap();
        assert_eq!(text, output.text);
        assert_eq!(text.lines().count(), 10);
        assert!(text.lines().all(|l| l.chars().count() == 20));

        let image = image::open(&output.image_path).unwrap();
        let (w, h) = (image.width(), image.height());
        assert!(w >= 20 && h >= 10);
        assert_eq!(w % 20, 0);
        assert_eq!(h % 10, 0);
    }

    #[test]
    fn test_run_rejects_small_width_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let err = demo_pipeline(dir.path(), 5).run().unwrap_err();
        assert!(matches!(err, AsciiError::WidthTooSmall { width: 5, .. }));
        assert!(!dir.path().join("art.txt").exists());
        assert!(!dir.path().join("art.png").exists());
    }

    #[test]
    fn test_run_rejects_huge_font_size_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut pipeline = demo_pipeline(dir.path(), 10);
        pipeline.render.font_size = 1.0e10;

        let err = pipeline.run().unwrap_err();
        assert!(matches!(err, AsciiError::InvalidFontSize { .. }));
        assert!(err.is_config_error());
        assert!(!dir.path().join("art.txt").exists());
    }

    #[test]
    fn test_render_grid_at_largest_font_size() {
        let lines = vec!["@@".to_string(); 2];
        let config = RenderConfig {
            font_path: Some(PathBuf::from("no/such/font.ttf")),
            font_size: crate::config::MAX_FONT_SIZE,
            ..Default::default()
        };
        let img = render_grid_lines(&lines, &config).unwrap();
        let cell = find_monospace_font(None, config.font_size).cell_size();
        assert_eq!(img.dimensions(), (2 * cell.width, 2 * cell.height));
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut pipeline = demo_pipeline(dir.path(), 40);
        pipeline.source = Source::File(dir.path().join("missing.png"));
        let err = pipeline.run().unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_run_saves_demo_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let mut pipeline = demo_pipeline(dir.path(), 16);
        pipeline.save_demo = Some(dir.path().join("demo/gradient.png"));
        pipeline.run().unwrap();

        let saved = image::open(dir.path().join("demo/gradient.png")).unwrap();
        assert_eq!((saved.width(), saved.height()), (64, 64));
    }

    #[test]
    fn test_run_from_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("black.png");
        image::GrayImage::new(40, 40).save(&input).unwrap();

        let mut pipeline = demo_pipeline(dir.path(), 10);
        pipeline.source = Source::File(input);
        pipeline.conversion.palette = Palette::from(PalettePreset::Blocks);
        let output = pipeline.run().unwrap();

        assert!(output.text.chars().filter(|&c| c != '\n').all(|c| c == '█'));
    }

    #[test]
    fn test_render_grid_empty_is_single_cell() {
        let grid = quantize(
            &crate::source::demo_gradient(32),
            &ConversionConfig {
                width: 10,
                ..Default::default()
            },
        )
        .unwrap();
        let img = render_grid(&grid, &Palette::default(), &RenderConfig::default()).unwrap();
        assert!(img.width() > 0 && img.height() > 0);

        let img = render_grid_lines(&[], &RenderConfig::default()).unwrap();
        let cell = find_monospace_font(None, RenderConfig::default().font_size).cell_size();
        assert_eq!(img.dimensions(), (cell.width, cell.height));
    }
}
