//! Domain data for the dashboard: pages, notifications, emails, stats,
//! honeypot sessions, threats, settings and chart series.

pub mod charts;
mod email;
mod honeypot;
mod notification;
pub mod page;
mod settings;
pub mod stats;
mod threat;

pub use charts::{BreakdownSlice, ChartSeries, LineChartSpec};
pub use email::{demo_inbox, EmailItem};
pub use honeypot::{demo_sessions, HoneypotSession};
pub use notification::{NotificationRequest, Severity};
pub use page::{default_pages, Page};
pub use settings::{default_settings, SettingToggle, TimeRange};
pub use stats::{default_stats, format_grouped, parse_grouped, parse_grouped_or_zero, StatCard};
pub use threat::{demo_threats, ThreatCard};
