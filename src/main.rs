use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hero_carousel::config::{Overrides, Settings, SlideSource};
use hero_carousel::constants::{FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use hero_carousel::engine::HeroEngine;

/// Auto-advancing hero image carousel
#[derive(Parser, Debug)]
#[command(name = "carousel", version, about)]
struct Cli {
    /// Directory of slide images, shown in file name order
    #[arg(required_unless_present = "manifest", conflicts_with = "manifest")]
    image_dir: Option<PathBuf>,

    /// TOML manifest listing slides, backgrounds and captions
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Auto-advance period in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Randomize slide order once at startup
    #[arg(long)]
    shuffle: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

impl Cli {
    fn source(&self) -> Result<SlideSource> {
        match (&self.manifest, &self.image_dir) {
            (Some(manifest), _) => Ok(SlideSource::Manifest(manifest.clone())),
            (None, Some(dir)) => Ok(SlideSource::Directory(dir.clone())),
            (None, None) => anyhow::bail!("either an image directory or --manifest is required"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hero_carousel=info,carousel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let source = cli.source()?;
    let overrides = Overrides {
        interval_ms: cli.interval_ms,
        shuffle: cli.shuffle,
    };
    let settings = Settings::resolve(&source, &overrides)
        .with_context(|| format!("Failed to load slides from {:?}", source))?;
    info!(slides = settings.slides.len(), "Loaded slide list");

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Hero Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = HeroEngine::initialize(&mut rl, &thread, &settings);

    // --- Main Loop ---
    while !rl.window_should_close() {
        engine.update(&rl);

        let mut d = rl.begin_drawing(&thread);
        engine.draw(&mut d);
    }

    info!(
        last_slide = engine.controller().current_index(),
        "Window closed"
    );
    Ok(())
}
