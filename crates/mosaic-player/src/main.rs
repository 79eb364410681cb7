//! Mosaic - the Fallers game in a window
//!
//! Usage:
//!   mosaic [config.toml] [--resolution N] [--fps N] [--grid] [--no-frame] [--seed N]

use anyhow::{Context, Result};
use clap::Parser;
use mosaic_game::FallerGame;
use mosaic_player::{load_settings, Overrides, PlayerApp};
use mosaic_runtime::GameLoop;
use std::path::PathBuf;
use winit::event_loop::EventLoop;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(about = "Click the falling tiles before they reach the floor")]
struct Args {
    /// Path to a TOML config file
    config: Option<PathBuf>,

    /// Tiles per side of the grid
    #[arg(long)]
    resolution: Option<u32>,

    /// Ticks per second
    #[arg(long)]
    fps: Option<u32>,

    /// Draw grid lines
    #[arg(long)]
    grid: bool,

    /// Hide the border around the grid
    #[arg(long)]
    no_frame: bool,

    /// Seed for repeatable games
    #[arg(long)]
    seed: Option<u64>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 720)]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let overrides = Overrides {
        resolution: args.resolution,
        frames_per_second: args.fps,
        grid: args.grid,
        no_frame: args.no_frame,
        seed: args.seed,
    };
    let source = args
        .config
        .as_ref()
        .map_or_else(|| "defaults".to_string(), |path| path.display().to_string());
    let settings = load_settings(args.config.as_deref(), &overrides)
        .with_context(|| format!("Failed to load settings from {}", source))?;

    log::info!(
        "Starting: {} tiles at {} fps",
        settings.config.resolution,
        settings.config.frames_per_second
    );

    let game = GameLoop::new(settings.config, FallerGame::new(settings.content))
        .context("Failed to create game loop")?;

    let event_loop = EventLoop::new()?;
    let mut app = PlayerApp::new(game, args.width, args.height);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
