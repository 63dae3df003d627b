//! Tracing setup for the terminal game.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to `log_file` so it stays off the game screen.
///
/// Honors `RUST_LOG`, defaulting to `info`. A subscriber that is already
/// installed is left in place.
pub fn init(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
