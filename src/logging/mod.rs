//! Diagnostic logging to disk.
//!
//! When enabled, installs a `tracing` subscriber that writes to a daily log
//! file named `contactform_<date>.log` in the configured log directory
//! (default: `~/.local/share/contactform/logs/`).

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(log_dir)
}

pub fn log_file_path(log_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    log_dir.join(format!("contactform_{}.log", date))
}

/// Install the global subscriber. Returns whether one was installed: not
/// when logging is disabled or another subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let log_dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_file_path(&log_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    if installed.is_err() {
        return Ok(false);
    }
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}
