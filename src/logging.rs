//! Logging init: file under the XDG state dir, or fallback to stderr.

use anyhow::Result;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,staticfetcher=debug"))
}

/// Initialize structured logging to
/// `~/.local/state/staticfetcher/staticfetcher.log`, falling back to stderr
/// when the state directory is unusable. Does nothing when the embedding
/// program already installed a subscriber.
pub fn init() {
    if init_file().is_err() {
        init_stderr();
    }
}

/// File-backed subscriber. Errors when the log file cannot be opened or a
/// subscriber is already set.
pub fn init_file() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("staticfetcher")?;
    let log_path = xdg_dirs.place_state_file("staticfetcher.log")?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set subscriber: {e}"))?;

    tracing::debug!("logging to {}", log_path.display());
    Ok(())
}

/// Stderr-only subscriber. No-op if a subscriber is already installed.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
