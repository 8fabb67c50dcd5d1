//! Runtime configuration.
//!
//! Defaults match the dashboard's fixed timings. They can be overridden by
//! a JSON file (`~/.genjutsu/config.json`), then by environment variables,
//! then by command-line flags.
//!
//! # Example
//!
//! ```
//! use genjutsu::config::DashboardConfig;
//! use std::time::Duration;
//!
//! let config = DashboardConfig::default()
//!     .with_toast_duration(Duration::from_millis(3000))
//!     .with_simulation(false);
//! assert!(!config.simulation_enabled);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::state::{SimulationTimings, DEFAULT_NARROW_BREAKPOINT, DEFAULT_TOAST_DURATION};

/// Delay before scan, export and reconnect actions complete.
pub const DEFAULT_ACTION_DELAY: Duration = Duration::from_millis(2000);

/// Delay before a blocked threat card is removed.
pub const DEFAULT_REMOVAL_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Toast auto-dismiss delay (default: 5000ms)
    pub toast_duration: Duration,
    /// Simulated threat feed, stat jitter and welcome timings
    pub simulation: SimulationTimings,
    /// Run the simulated sources at all
    pub simulation_enabled: bool,
    /// Terminal width at or below which the sidebar collapses
    pub narrow_breakpoint: u16,
    /// In-flight duration of scan / export / reconnect
    pub action_delay: Duration,
    /// Fade-out time before a blocked threat is removed
    pub removal_delay: Duration,
    /// Log file path; no logging when unset
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            toast_duration: DEFAULT_TOAST_DURATION,
            simulation: SimulationTimings::default(),
            simulation_enabled: true,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            action_delay: DEFAULT_ACTION_DELAY,
            removal_delay: DEFAULT_REMOVAL_DELAY,
            log_file: None,
        }
    }
}

/// On-disk overrides. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    toast_ms: Option<u64>,
    feed_ms: Option<u64>,
    jitter_ms: Option<u64>,
    welcome_ms: Option<u64>,
    narrow_cols: Option<u16>,
    simulation: Option<bool>,
    log_file: Option<PathBuf>,
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_simulation_timings(mut self, timings: SimulationTimings) -> Self {
        self.simulation = timings;
        self
    }

    pub fn with_simulation(mut self, enabled: bool) -> Self {
        self.simulation_enabled = enabled;
        self
    }

    pub fn with_narrow_breakpoint(mut self, columns: u16) -> Self {
        self.narrow_breakpoint = columns;
        self
    }

    pub fn with_action_delay(mut self, delay: Duration) -> Self {
        self.action_delay = delay;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Default config file location (`~/.genjutsu/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".genjutsu").join("config.json"))
    }

    /// Load defaults, then the config file (if any), then the environment.
    ///
    /// Runs before logging is up, so problems come back as warnings for the
    /// caller to log once it is.
    pub fn load() -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let config = match Self::default_path() {
            Some(path) => Self::default().merge_file(&path, &mut warnings),
            None => Self::default(),
        };
        (config.merge_env(&mut warnings), warnings)
    }

    /// Apply overrides from a JSON file.
    ///
    /// A missing file leaves the config unchanged. An unreadable or
    /// malformed file is ignored with a warning.
    pub fn merge_file(mut self, path: &Path, warnings: &mut Vec<String>) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return self,
            Err(e) => {
                warnings.push(format!("Failed to read config {}: {}", path.display(), e));
                return self;
            }
        };

        let file: ConfigFile = match serde_json::from_str(&contents) {
            Ok(file) => file,
            Err(e) => {
                warnings.push(format!("Ignoring malformed config {}: {}", path.display(), e));
                return self;
            }
        };

        if let Some(ms) = file.toast_ms {
            self.toast_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = file.feed_ms.and_then(|ms| interval_ms("feed_ms", ms, warnings)) {
            self.simulation.feed_interval = ms;
        }
        if let Some(ms) = file.jitter_ms.and_then(|ms| interval_ms("jitter_ms", ms, warnings)) {
            self.simulation.jitter_interval = ms;
        }
        if let Some(ms) = file.welcome_ms {
            self.simulation.welcome_delay = Duration::from_millis(ms);
        }
        if let Some(cols) = file.narrow_cols {
            self.narrow_breakpoint = cols;
        }
        if let Some(enabled) = file.simulation {
            self.simulation_enabled = enabled;
        }
        if file.log_file.is_some() {
            self.log_file = file.log_file;
        }
        self
    }

    /// Apply overrides from `GENJUTSU_*` environment variables.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn merge_env(mut self, warnings: &mut Vec<String>) -> Self {
        if let Some(ms) = env_u64("GENJUTSU_TOAST_MS", warnings) {
            self.toast_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = env_u64("GENJUTSU_FEED_MS", warnings)
            .and_then(|ms| interval_ms("GENJUTSU_FEED_MS", ms, warnings))
        {
            self.simulation.feed_interval = ms;
        }
        if let Some(ms) = env_u64("GENJUTSU_JITTER_MS", warnings)
            .and_then(|ms| interval_ms("GENJUTSU_JITTER_MS", ms, warnings))
        {
            self.simulation.jitter_interval = ms;
        }
        if let Some(cols) = env_u64("GENJUTSU_NARROW_COLS", warnings) {
            self.narrow_breakpoint = cols.min(u16::MAX as u64) as u16;
        }
        if std::env::var("GENJUTSU_NO_SIM").is_ok() {
            self.simulation_enabled = false;
        }
        self
    }
}

fn env_u64(name: &str, warnings: &mut Vec<String>) -> Option<u64> {
    let value = std::env::var(name).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warnings.push(format!("Ignoring {}={:?}: not a number", name, value));
            None
        }
    }
}

/// A periodic interval in milliseconds; zero is rejected.
fn interval_ms(name: &str, ms: u64, warnings: &mut Vec<String>) -> Option<Duration> {
    if ms == 0 {
        warnings.push(format!("Ignoring {}=0: interval must be at least 1ms", name));
        return None;
    }
    Some(Duration::from_millis(ms))
}
