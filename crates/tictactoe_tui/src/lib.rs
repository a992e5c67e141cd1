//! Terminal front end for tic-tac-toe with a rewindable move history.
//!
//! - [`cli`]: command-line parsing
//! - [`app`]: application state driven by key presses
//! - [`ui`]: stateless rendering of the game view
//! - [`replay`]: headless play for scripts and tests

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
mod input;
pub mod replay;
mod terminal;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use terminal::run_tui;

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Sends logs to `path` so they do not draw over the game.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends logs to stderr, warnings and above unless `RUST_LOG` says otherwise.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
