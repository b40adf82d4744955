//! Replay a scene script and write the canvas to an image.
//!
//! Usage:
//!   scene-replay SCRIPT [-o OUTPUT] [--width W] [--height H] [--keep-going]
//!
//! Output format follows the extension: `.bmp`, `.raw` or `.rgba`.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use scene_replay::{replay, save_image, CanvasSink};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vector_canvas::config::{Canvas, SceneConfig};
use vector_canvas::scene::Scene;

#[derive(Parser, Debug)]
#[command(name = "scene-replay", version, about = "Replay a vector-canvas scene script")]
struct Cli {
    /// Script with one command per line.
    script: PathBuf,

    /// Image to write (.bmp, .raw or .rgba).
    #[arg(short, long, default_value = "scene.bmp")]
    output: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Maximum number of clicked points.
    #[arg(long, default_value_t = 10)]
    max_points: usize,

    /// Continue past commands the scene rejects.
    #[arg(long)]
    keep_going: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let script = fs::read_to_string(&cli.script)
        .with_context(|| format!("reading {}", cli.script.display()))?;

    let config = SceneConfig {
        canvas: Canvas::new(cli.width, cli.height),
        ..SceneConfig::default()
    }
    .with_max_points(cli.max_points);
    let mut sink = CanvasSink::new(config.canvas);
    let mut scene = Scene::new(config);

    let report = replay(&script, &mut scene, &mut sink, cli.keep_going)?;
    save_image(&cli.output, sink.buffer())?;
    info!(
        commands = report.commands,
        warnings = report.warnings,
        output = %cli.output.display(),
        "replay finished"
    );
    Ok(())
}
