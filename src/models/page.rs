//! Logical pages of the dashboard.

/// One logical view of the dashboard, selected from the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Stable key used by nav controls and `activate`
    pub id: String,
    /// Label shown on the nav control and copied into the page title
    pub label: String,
    /// Single-character shortcut shown next to the nav item
    pub shortcut: char,
}

impl Page {
    pub fn new(id: impl Into<String>, label: impl Into<String>, shortcut: char) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shortcut,
        }
    }
}

pub const PAGE_DASHBOARD: &str = "dashboard";
pub const PAGE_MONITORING: &str = "monitoring";
pub const PAGE_THREATS: &str = "threats";
pub const PAGE_HONEYPOT: &str = "honeypot";
pub const PAGE_SETTINGS: &str = "settings";

/// The static page table registered at startup, in sidebar order.
pub fn default_pages() -> Vec<Page> {
    vec![
        Page::new(PAGE_DASHBOARD, "Dashboard", '1'),
        Page::new(PAGE_MONITORING, "Email Monitor", '2'),
        Page::new(PAGE_THREATS, "Threats", '3'),
        Page::new(PAGE_HONEYPOT, "Honeypot", '4'),
        Page::new(PAGE_SETTINGS, "Settings", '5'),
    ]
}
