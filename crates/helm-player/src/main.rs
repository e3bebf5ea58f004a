//! Helm - headless game loop player
//!
//! Runs the steerable-car demo against an offscreen surface, driven by a
//! scripted key sequence.
//!
//! Usage:
//!   helm [--config <helm.toml>] [--frames N] [--duration SECS] [--screenshot out.png]

mod logging;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use helm_player::{Engine, EngineConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helm")]
#[command(about = "Helm game loop player - drive a kinematic car headlessly")]
#[command(version)]
struct Args {
    /// Path to config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Stop after this many seconds of wall-clock time
    #[arg(long)]
    duration: Option<f64>,

    /// Target frame rate
    #[arg(long)]
    fps: Option<f64>,

    /// Save the last frame as PNG
    #[arg(long)]
    screenshot: Option<PathBuf>,

    /// Keep running after the input script ends
    #[arg(long)]
    no_quit: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(frames) = args.frames {
        config.game_loop.max_frames = Some(frames);
    }
    if let Some(secs) = args.duration {
        config.game_loop.max_seconds = Some(secs);
    }
    if let Some(fps) = args.fps {
        config.game_loop.target_fps = fps;
    }
    if let Some(path) = args.screenshot {
        config.display.screenshot = Some(path);
    }
    if args.no_quit {
        config.input.quit_when_done = false;
    }

    let mut engine = Engine::new(config).context("Failed to build engine")?;

    let summary = engine.start().context("Game loop failed")?;

    println!(
        "Ran {} frames in {:.2}s ({:.1} fps)",
        summary.frames,
        summary.elapsed.as_secs_f64(),
        summary.average_fps()
    );
    for (i, body) in engine.scene().bodies.iter().enumerate() {
        println!(
            "Body {}: position ({:.2}, {:.2}), heading {:.1}°",
            i, body.position.x, body.position.y, body.heading
        );
    }

    Ok(())
}
