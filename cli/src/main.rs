mod args;

use std::io::Write;
use std::process::ExitCode;

use args::Args;
use clap::Parser;
use glyphgrid::{AsciiError, PipelineOutput};

fn run(args: &Args) -> Result<PipelineOutput, AsciiError> {
    let pipeline = args.to_pipeline()?;
    if let glyphgrid::Source::Demo { size } = pipeline.source {
        log::info!("using {size}x{size} demo gradient");
    }
    pipeline.run()
}

/// Print the outcome of a run and pick the process exit status
///
/// Success writes the output paths to `out` and returns 0; any error goes to
/// `err` prefixed with `Error:` and returns 1.
fn report(
    result: &Result<PipelineOutput, AsciiError>,
    print_text: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    match result {
        Ok(output) => {
            if print_text {
                let _ = writeln!(out, "{}", output.text);
            }
            let _ = writeln!(out, "ASCII text saved to: {}", output.text_path.display());
            let _ = writeln!(out, "Rendered image saved to: {}", output.image_path.display());
            let _ = writeln!(out, "Done ({}x{} characters).", output.cols, output.rows);
            0
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            1
        }
    }
}

fn main() -> ExitCode {
    // Configure logging
    env_logger::init();

    let args = Args::parse();
    let result = run(&args);
    let code = report(
        &result,
        args.print,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    ExitCode::from(code)
}
