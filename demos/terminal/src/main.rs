//! terminal — the maze runner engine on an ANSI terminal.
//!
//! Mirrors the 7×7 LED matrix build: a fixed-interval loop polls a
//! [`SimHost`], and every changed frame is latched to the screen.  The
//! status LED becomes a coloured line under the maze.
//!
//! ```text
//! terminal [CONFIG.toml] [MAX_FRAMES]
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=mz_sim=debug` (or `trace` to see each new
//! layout) and redirect stderr to a file to keep the picture clean.

mod render;

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use mz_core::{MazeConfig, Palette};
use mz_sim::{DisplayTask, MazeSimBuilder, SimHost};

use render::{AnsiMatrix, AnsiStatus};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Frame interval of the 7×7 LED matrix build.
const DEFAULT_INTERVAL_MS: u64 = 60;

// ── Configuration file ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    interval_ms: u64,
    maze:        MazeConfig,
    palette:     Palette,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            maze:        MazeConfig::default(),
            palette:     Palette::default(),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: DemoConfig = toml::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let max_frames: Option<u64> = args
        .next()
        .map(|s| s.parse())
        .transpose()
        .context("MAX_FRAMES must be a non-negative integer")?;

    let config = load_config(config_path.as_deref().map(Path::new))?;
    tracing::info!(
        width = config.maze.width,
        height = config.maze.height,
        sentry = config.palette.sentry_enabled(),
        interval_ms = config.interval_ms,
        "starting maze runner"
    );

    let matrix = AnsiMatrix::new(config.maze.width, config.maze.height, config.palette.path);
    let sim = MazeSimBuilder::new(config.maze, config.palette, matrix)
        .status_sink(AnsiStatus::default())
        .build()
        .context("building the simulation")?;

    let mut host = SimHost::new(sim);
    host.start();

    let interval = Duration::from_millis(config.interval_ms);
    let mut frames = 0u64;
    while max_frames.is_none_or(|max| frames < max) {
        if host.poll() {
            frames += 1;
        }
        thread::sleep(interval);
    }

    host.stop();
    tracing::info!(frames, status = %host.sim().status(), "maze runner finished");
    Ok(())
}
