//! Page router.
//!
//! Owns which page is active and which nav control is active. Both are the
//! same index into the page table, so they cannot drift apart. Also owns
//! the collapsible sidebar used on narrow terminals.

use crate::error::{log_degraded, DashboardError, DashboardResult};
use crate::models::{default_pages, Page};

/// Terminal width (in columns) at or below which the layout is "narrow".
pub const DEFAULT_NARROW_BREAKPOINT: u16 = 80;

#[derive(Debug, Clone)]
pub struct Router {
    pages: Vec<Page>,
    /// Index of the active page (and its nav control)
    active: usize,
    /// Current page title display
    title: String,
    /// Whether the sidebar is expanded (only meaningful in narrow mode)
    sidebar_open: bool,
    viewport_width: u16,
    narrow_breakpoint: u16,
}

impl Router {
    /// Create a router with the first page active.
    ///
    /// An empty page table is replaced by the default pages, since exactly
    /// one page must always be active.
    pub fn new(pages: Vec<Page>, narrow_breakpoint: u16) -> Self {
        let pages = if pages.is_empty() {
            tracing::warn!("Router created with no pages, using defaults");
            default_pages()
        } else {
            pages
        };
        let title = pages[0].label.clone();
        Self {
            pages,
            active: 0,
            title,
            sidebar_open: false,
            viewport_width: u16::MAX,
            narrow_breakpoint,
        }
    }

    fn find(&self, page_id: &str) -> DashboardResult<usize> {
        self.pages
            .iter()
            .position(|p| p.id == page_id)
            .ok_or_else(|| DashboardError::missing("page", page_id))
    }

    /// Activate the page with the given id.
    ///
    /// Unknown ids are ignored. Returns whether the id named a page.
    /// Activating the active page leaves the state unchanged, apart from
    /// collapsing the sidebar on narrow layouts.
    pub fn activate(&mut self, page_id: &str) -> bool {
        let index = match self.find(page_id) {
            Ok(index) => index,
            Err(e) => {
                log_degraded("activate", &e);
                return false;
            }
        };

        if index != self.active {
            tracing::debug!(from = %self.pages[self.active].id, to = %page_id, "Page activated");
        }
        self.active = index;
        self.title = self.pages[index].label.clone();

        if self.is_narrow() {
            self.sidebar_open = false;
        }
        true
    }

    /// Activate the page after the current one, wrapping around.
    pub fn activate_next(&mut self) {
        let next = (self.active + 1) % self.pages.len();
        let id = self.pages[next].id.clone();
        self.activate(&id);
    }

    /// Activate the page before the current one, wrapping around.
    pub fn activate_previous(&mut self) {
        let prev = (self.active + self.pages.len() - 1) % self.pages.len();
        let id = self.pages[prev].id.clone();
        self.activate(&id);
    }

    /// Activate the page bound to a shortcut key.
    pub fn activate_shortcut(&mut self, key: char) -> bool {
        match self.pages.iter().find(|p| p.shortcut == key) {
            Some(page) => {
                let id = page.id.clone();
                self.activate(&id)
            }
            None => false,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn active_page(&self) -> &Page {
        &self.pages[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether the page's content region is shown.
    pub fn is_active(&self, page_id: &str) -> bool {
        self.pages[self.active].id == page_id
    }

    /// Whether the page's nav control is highlighted.
    pub fn is_nav_active(&self, page_id: &str) -> bool {
        self.is_active(page_id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    // ------------------------------------------------------------------------
    // Sidebar
    // ------------------------------------------------------------------------

    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport_width <= self.narrow_breakpoint
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Whether the sidebar is drawn at all.
    ///
    /// Wide layouts always show it; narrow layouts only when expanded.
    pub fn sidebar_visible(&self) -> bool {
        !self.is_narrow() || self.sidebar_open
    }

    /// Handle a pointer interaction anywhere on screen.
    ///
    /// In narrow mode, a click outside both the sidebar and its toggle
    /// collapses the sidebar. Returns whether the sidebar was collapsed.
    pub fn handle_outside_click(&mut self, inside_sidebar: bool, inside_toggle: bool) -> bool {
        if self.is_narrow() && !inside_sidebar && !inside_toggle && self.sidebar_open {
            self.sidebar_open = false;
            return true;
        }
        false
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(default_pages(), DEFAULT_NARROW_BREAKPOINT)
    }
}
