//! Hit area system for mouse interactions.
//!
//! Components register hit areas while rendering, and the event loop asks
//! the registry which action a click lands on.

use ratatui::layout::Rect;
use ratatui::style::Style;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Chrome
    /// Sidebar nav entry for the page with this id
    NavigatePage(String),
    /// Hamburger button in the header
    ToggleSidebar,
    /// Notification badge in the header
    OpenNotifications,
    /// Close button on the toast
    DismissToast,
    /// Blank cells of an overlay; swallows the click
    Backdrop,

    // Dashboard
    ScanNow,
    CycleTimeRange,

    // Email Monitor
    /// Category chip with this name
    FilterCategory(String),
    FocusSearch,
    /// Checkbox of the email with this id
    ToggleEmail(String),
    ToggleSelectAll,
    /// Row at this visible index
    ViewEmail(usize),

    // Threats
    ExportReport,
    ViewThreat(usize),
    DeleteThreat(usize),

    // Honeypot
    ToggleHoneypot,
    ViewConversation(usize),
    EndSession(usize),

    // Settings
    ToggleSetting(usize),
    Reconnect,

    // Confirmation dialog
    ConfirmYes,
    ConfirmNo,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry for managing hit areas across the UI.
///
/// Cleared at the start of every render. Later registrations sit on top of
/// earlier ones, so a dialog registered last wins over the page under it.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas and reset hover state.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Returns the action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let new_hovered = self
            .areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// The hovered area, if any.
    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
