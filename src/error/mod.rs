//! Error types for the dashboard engine.
//!
//! Nothing in the interaction engine is fatal. Every [`DashboardError`]
//! degrades to a no-op or a skipped side effect at the call site:
//!
//! | Variant | Raised when | Policy |
//! |---------|-------------|--------|
//! | `MissingTarget` | a page id, list item or card does not exist | silent no-op |
//! | `MalformedNumber` | displayed text is not an integer | treat as 0 |
//! | `Declined` | the user answered "no" to a confirmation | state unchanged, no toast |
//!
//! Application-level failures (terminal setup, log file) use
//! `color_eyre::Result` instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A requested target does not exist.
    #[error("{kind} '{id}' not found")]
    MissingTarget { kind: &'static str, id: String },

    /// Displayed text could not be parsed as an integer.
    #[error("malformed numeric text '{text}'")]
    MalformedNumber { text: String },

    /// A destructive action was declined at the confirmation prompt.
    #[error("{action} declined by user")]
    Declined { action: String },
}

impl DashboardError {
    pub fn missing(kind: &'static str, id: impl Into<String>) -> Self {
        DashboardError::MissingTarget {
            kind,
            id: id.into(),
        }
    }
}

/// Result alias for fallible engine lookups.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Log a swallowed engine error at debug level.
///
/// Used by public operations that degrade to a no-op.
pub fn log_degraded(operation: &str, err: &DashboardError) {
    tracing::debug!(operation, error = %err, "degraded to no-op");
}
