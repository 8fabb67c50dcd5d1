//! Color theme constants for the dashboard.
//!
//! Dark palette with one accent color per severity.

use ratatui::style::Color;

use crate::models::Severity;

// ============================================================================
// Base Palette
// ============================================================================

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and the active nav entry
pub const COLOR_ACCENT: Color = Color::Rgb(99, 102, 241); // indigo #6366F1

/// Page title and logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Background for the cursor row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 32, 48);

/// Background for dialog boxes and the toast
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Severity Colors
// ============================================================================

pub const COLOR_DANGER: Color = Color::Rgb(239, 68, 68); // red #EF4444
pub const COLOR_SUCCESS: Color = Color::Rgb(16, 185, 129); // green #10B981
pub const COLOR_WARNING: Color = Color::Rgb(245, 158, 11); // amber #F59E0B
pub const COLOR_INFO: Color = Color::Rgb(59, 130, 246); // blue #3B82F6

/// Accent color for a notification severity.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Danger => COLOR_DANGER,
        Severity::Success => COLOR_SUCCESS,
        Severity::Warning => COLOR_WARNING,
        Severity::Info => COLOR_INFO,
    }
}

/// Color for a threat risk label.
pub fn risk_color(risk: &str) -> Color {
    match risk {
        "Critical" | "High" => COLOR_DANGER,
        "Medium" => COLOR_WARNING,
        _ => COLOR_INFO,
    }
}

/// Color for an email category tag.
pub fn category_color(category: &str) -> Color {
    match category {
        "phishing" => COLOR_DANGER,
        "malware" => Color::Rgb(168, 85, 247), // purple #A855F7
        "spoofing" => COLOR_WARNING,
        "safe" => COLOR_SUCCESS,
        _ => COLOR_DIM,
    }
}
