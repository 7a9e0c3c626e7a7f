//! Command-line entry point for the `dragon` tool.
//!
//! Renders the Heighway dragon curve to a PNG file. Malformed option values
//! fall back to documented defaults with a warning instead of aborting.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::Parser;
use dragoncurve::{Color, RenderConfig, render};

/// Lenient argument resolution.
mod config;

#[derive(Parser)]
#[command(name = "dragon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the Heighway dragon curve to a PNG image")]
/// Top-level CLI options.
struct Cli {
    #[arg(
        value_name = "ITERATIONS",
        help = "Number of curve folds (non-negative integer, default 10)"
    )]
    /// Iteration count as given; resolved leniently.
    iterations: Option<String>,

    #[arg(help = "Optional output file path; defaults to dragon{N}.png")]
    /// Optional output PNG path.
    output: Option<PathBuf>,

    #[arg(
        long = "dense",
        default_value_t = false,
        help = "Draw at single-unit resolution instead of the classic two-unit stride"
    )]
    /// Dense mode flag.
    dense: bool,

    #[arg(
        long = "from",
        default_value = "0xFFFFFF",
        value_name = "COLOR",
        help = "Path color at the start of the curve (name or hex, '#'/'0x' optional)"
    )]
    /// Blend color at path progress 0.
    blend_start: String,

    #[arg(
        long = "to",
        default_value = "0xFFFFFF",
        value_name = "COLOR",
        help = "Path color at the end of the curve (name or hex, '#'/'0x' optional)"
    )]
    /// Blend color at path progress 1.
    blend_end: String,

    #[arg(
        long = "bg",
        visible_alias = "background",
        default_value = "0x000000",
        value_name = "COLOR",
        help = "Background color (name or hex, '#'/'0x' optional)"
    )]
    /// Background fill color.
    background: String,

    #[arg(
        long = "partial",
        default_value = "1.0",
        value_name = "FRACTION",
        help = "Fraction of the path to draw, in [0, 1]"
    )]
    /// Partial-rendering cutoff as given; resolved leniently.
    partial: String,
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => println!("{ok_msg}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Encode a rendered buffer and save it to `path`.
fn save_image(buffer: dragoncurve::PixelBuffer, path: &Path) -> Result<()> {
    let (width, height) = (buffer.width(), buffer.height());
    let image = image::RgbaImage::from_raw(width, height, buffer.into_rgba_bytes())
        .context("pixel buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Resolve arguments, render, and save.
fn run(cli: &Cli) -> Result<()> {
    let iterations = config::resolve_iterations(cli.iterations.as_deref());
    let render_config = RenderConfig {
        iterations,
        dense: cli.dense,
        blend_start: config::resolve_color(&cli.blend_start, "start", Color::WHITE),
        blend_end: config::resolve_color(&cli.blend_end, "end", Color::WHITE),
        background: config::resolve_color(&cli.background, "background", Color::BLACK),
        partial: config::resolve_partial(&cli.partial),
    };

    let buffer = render(&render_config)
        .with_context(|| format!("failed to render {iterations} iterations"))?;

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| config::default_output(iterations));
    save_image(buffer, &path)
}

fn main() {
    let cli = Cli::parse();
    report_ok(run(&cli), "OK!");
}
