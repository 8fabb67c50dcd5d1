//! Settings page toggles and the chart time range selector.

/// A named on/off setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingToggle {
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

impl SettingToggle {
    pub fn new(name: impl Into<String>, description: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            enabled,
        }
    }

    /// `enabled` / `disabled`, as used in the update notification.
    pub fn status_word(&self) -> &'static str {
        if self.enabled {
            "enabled"
        } else {
            "disabled"
        }
    }
}

pub fn default_settings() -> Vec<SettingToggle> {
    vec![
        SettingToggle::new("Real-time Scanning", "Scan new emails as they arrive", true),
        SettingToggle::new("Auto-block Threats", "Move detected threats to quarantine", true),
        SettingToggle::new("Email Notifications", "Send a daily summary email", false),
        SettingToggle::new("Honeypot Auto-engage", "Reply to scammers automatically", false),
    ]
}

/// Time window for the threat chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Last7Days,
    Last30Days,
    Last90Days,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "Last 7 days",
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::Last90Days => "Last 90 days",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            TimeRange::Last7Days => TimeRange::Last30Days,
            TimeRange::Last30Days => TimeRange::Last90Days,
            TimeRange::Last90Days => TimeRange::Last7Days,
        }
    }
}
