//! Logging configuration using tracing.
//!
//! The terminal is owned by the TUI, so log lines go to a file:
//! `~/.pulse/pulse.log`. The level is controlled by the `PULSE_LOG`
//! environment variable (`PULSE_LOG=debug pulse`), defaulting to `info`
//! for this crate.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Directory holding the log file and the preference file.
const DATA_DIR: &str = ".pulse";

/// Log file name.
const LOG_FILE: &str = "pulse.log";

/// Initialize the logging subsystem.
///
/// Appends to `~/.pulse/pulse.log` with ANSI colors disabled. Falls back to
/// the current directory when no home directory can be determined.
pub fn init() -> Result<()> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {:?}", parent))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("Failed to open log file {:?}", path))?;

    let env_filter =
        EnvFilter::try_from_env("PULSE_LOG").unwrap_or_else(|_| EnvFilter::new("pulse=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pulse starting");

    Ok(())
}

/// Path of the log file.
pub fn log_file_path() -> PathBuf {
    let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(DATA_DIR).join(LOG_FILE)
}
