//! Pixel Walker runner (default binary).
//!
//! Interactive mode draws the world into the terminal with half-block pixels
//! and reads keyboard, mouse and resize events through crossterm.
//! `pixel-walker replay <script.json>` runs a script headlessly instead.

use std::fs::File;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use pixel_walker::app::{App, Flow};
use pixel_walker::core::WorldConfig;
use pixel_walker::input::{IntentSource, TerminalIntents};
use pixel_walker::replay::{parse_replay_args, run_replay_file};
use pixel_walker::term::{FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    setup_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(config) = parse_replay_args(&args)? {
        let report = run_replay_file(&config)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut term = TerminalRenderer::new()?;
    let viewport = term.viewport()?.ensure_min()?;
    term.enter()?;

    let result = run(&mut term, viewport);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the file named by `PIXEL_WALKER_LOG_PATH`; the terminal owns
/// stdout, so nothing is installed when it is unset.
fn setup_logging() -> Result<()> {
    let Some(path) = std::env::var_os("PIXEL_WALKER_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.to_string_lossy()))?;

    let env_filter =
        EnvFilter::try_from_env("PIXEL_WALKER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, viewport: Viewport) -> Result<()> {
    let config = WorldConfig::from_env();
    let mut app = App::new(config, viewport);
    let mut intents = TerminalIntents::new();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;

    tracing::info!(
        cols = viewport.width,
        rows = viewport.height,
        tile = app.world().config().tile_size,
        "terminal session started"
    );

    loop {
        let now = now_ms();
        if app.frame(now, &mut fb) {
            term.draw_swap(&mut fb)?;
        }

        let batch = intents.poll_batch(app.poll_timeout(now_ms()))?;
        for intent in batch {
            let before = app.viewport();
            if app.handle_intent(intent, now_ms()) == Flow::Quit {
                tracing::info!("quit");
                return Ok(());
            }
            if app.viewport() != before {
                term.invalidate();
            }
        }
    }
}
