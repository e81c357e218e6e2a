//! Terminal cube runner (default binary).
//!
//! Parses the launch configuration, builds the renderer, then runs the
//! fixed-cadence frame loop inside a raw-mode terminal session.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use tui_cube::cli::Args;
use tui_cube::core::Renderer;
use tui_cube::engine::{run_loop, Controller, FramePacer};
use tui_cube::input::CrosstermKeys;
use tui_cube::term::{install_panic_hook, TerminalRenderer};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.render_config()?;
    let renderer = Renderer::new(&config).context("failed to create renderer")?;
    let mut controller = Controller::new(renderer);

    install_panic_hook();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut controller, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    tracing::info!(frames = controller.frames(), "shutdown");
    result
}

fn run(term: &mut TerminalRenderer, controller: &mut Controller, args: &Args) -> Result<()> {
    let mut keys = CrosstermKeys;
    let mut pacer = FramePacer::from_millis(args.frame_ms);
    tracing::info!(
        width = args.width,
        height = args.height,
        frame_ms = args.frame_ms,
        "frame loop started"
    );
    run_loop(controller, &mut keys, &mut pacer, |frame| term.draw(frame))
}

/// Log to `--log-file` when given; the terminal itself is never logged to.
fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
