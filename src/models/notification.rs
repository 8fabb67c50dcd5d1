//! Notification request types.
//!
//! A [`NotificationRequest`] is built by a caller, handed to the toast slot,
//! and discarded once displayed.

use serde::{Deserialize, Serialize};

/// Severity of a notification, controlling its icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Threat or failure (shield icon, red accent). Also the fallback.
    #[default]
    Danger,
    /// Completed action (check icon, green accent)
    Success,
    /// Suspicious activity (warning icon, amber accent)
    Warning,
    /// Neutral progress or detail (info icon, blue accent)
    Info,
}

impl Severity {
    /// Parse a severity name. Unknown names fall back to [`Severity::Danger`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            _ => Severity::Danger,
        }
    }

    /// Icon glyph shown at the left of the toast.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Danger => "⛨",
            Severity::Success => "✔",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A request to show a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl NotificationRequest {
    /// Create a request with an explicit severity.
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn danger(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Danger)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Success)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Warning)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Info)
    }
}
