//! File logging using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns the terminal, so logs never go to stdout or stderr. When a
//! log file is configured, events are appended to it; otherwise no
//! subscriber is installed and `tracing` macros are no-ops.
//!
//! The filter comes from `GENJUTSU_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "GENJUTSU_LOG";

/// Build the env filter, falling back to `default_level` when unset or invalid.
pub fn build_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber writing to `path`.
///
/// Returns `Ok(false)` when no path is given or a subscriber is already
/// installed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(path: Option<&Path>) -> io::Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(build_env_filter("info"))
        .with(layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Logging to {}", path.display());
    }
    Ok(installed)
}
