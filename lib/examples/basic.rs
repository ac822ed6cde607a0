/// Basic example: draw a test image and convert it to ASCII art
///
/// Creates a circle on a gray background, prints the text at two widths
/// and renders the wider one back to a PNG.
use glyphgrid::processor::{render_grid, save_image};
use glyphgrid::source::Source;
use glyphgrid::{ConversionConfig, Palette, PalettePreset, RenderConfig, quantize};
use image::{GrayImage, Luma};

fn main() -> Result<(), glyphgrid::AsciiError> {
    println!("glyphgrid - Basic Example");
    println!("=========================\n");

    // Gray background with a dark ring and a white disc
    let (width, height) = (240, 160);
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    let img = GrayImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < radius {
            Luma([255])
        } else if (dist - radius).abs() < 5.0 {
            Luma([0])
        } else {
            Luma([110])
        }
    });
    println!("Created test image: {}x{}\n", width, height);

    for (cols, preset) in [(40, PalettePreset::Dense), (60, PalettePreset::Blocks)] {
        let config = ConversionConfig {
            width: cols,
            palette: Palette::from(preset),
            ..Default::default()
        };
        let grid = quantize(&img, &config)?;
        println!("{} columns, {} palette:", cols, preset.name());
        println!("{}\n", grid.to_text(&config.palette));

        if cols == 60 {
            let rendered = render_grid(&grid, &config.palette, &RenderConfig::default())?;
            save_image(&rendered, std::path::Path::new("basic_output.png"))?;
            println!("✓ Saved render to: basic_output.png");
        }
    }

    // The same pipeline is available from a generated gradient
    let gradient = Source::Demo { size: 128 }.load()?;
    let config = ConversionConfig {
        width: 32,
        ..Default::default()
    };
    let grid = quantize(&gradient, &config)?;
    println!("\nDemo gradient:\n{}", grid.to_text(&Palette::default()));

    Ok(())
}
