//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions render functions ask: how wide the sidebar is, how many stat
//! cards fit on a row, whether charts stack.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    ExtraSmall,
    /// At or below the narrow breakpoint
    Narrow,
    Medium,
    Large,
}

/// Width of the expanded sidebar in columns.
pub const SIDEBAR_WIDTH: u16 = 22;

/// Height of the header row block.
pub const HEADER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
    /// Columns at or below which the layout is narrow
    pub narrow_breakpoint: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16, narrow_breakpoint: u16) -> Self {
        Self {
            width,
            height,
            narrow_breakpoint,
        }
    }

    pub fn from_rect(area: Rect, narrow_breakpoint: u16) -> Self {
        Self::new(area.width, area.height, narrow_breakpoint)
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// A width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Queries
    // ========================================================================

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width <= self.narrow_breakpoint {
            SizeCategory::Narrow
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.width <= self.narrow_breakpoint
    }

    pub fn is_extra_small(&self) -> bool {
        self.width_category() == SizeCategory::ExtraSmall
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    // ========================================================================
    // Layout Decisions
    // ========================================================================

    /// Stat cards per row on the dashboard.
    pub fn stat_columns(&self) -> u16 {
        match self.width_category() {
            SizeCategory::ExtraSmall => 1,
            SizeCategory::Narrow | SizeCategory::Medium => 2,
            SizeCategory::Large => 4,
        }
    }

    /// Whether the two dashboard charts stack vertically.
    pub fn should_stack_charts(&self) -> bool {
        self.width_category() != SizeCategory::Large
    }

    /// Whether email rows show the preview line.
    pub fn should_show_previews(&self) -> bool {
        !self.is_extra_small() && !self.is_short()
    }
}
