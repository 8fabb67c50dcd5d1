//! Page navigation and per-page list cursors.

use super::{App, InputMode};
use crate::models::page::{PAGE_HONEYPOT, PAGE_MONITORING, PAGE_SETTINGS, PAGE_THREATS};

impl App {
    /// Activate a page by id. Unknown ids are ignored.
    pub fn activate_page(&mut self, page_id: &str) -> bool {
        let changed = self.router.activate(page_id);
        if changed {
            self.leave_search();
            self.mark_dirty();
        }
        changed
    }

    pub fn next_page(&mut self) {
        self.router.activate_next();
        self.leave_search();
        self.mark_dirty();
    }

    pub fn previous_page(&mut self) {
        self.router.activate_previous();
        self.leave_search();
        self.mark_dirty();
    }

    /// Number key shortcut for a page.
    pub fn activate_shortcut(&mut self, key: char) -> bool {
        let changed = self.router.activate_shortcut(key);
        if changed {
            self.leave_search();
            self.mark_dirty();
        }
        changed
    }

    pub fn toggle_sidebar(&mut self) {
        self.router.toggle_sidebar();
        self.mark_dirty();
    }

    pub fn enter_search(&mut self) {
        if self.router.is_active(PAGE_MONITORING) {
            self.input_mode = InputMode::Search;
            self.mark_dirty();
        }
    }

    pub fn leave_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Length of the list the cursor walks on the active page.
    fn active_list_len(&self) -> usize {
        let page = self.router.active_page().id.as_str();
        match page {
            PAGE_MONITORING => self.inbox.visible_count(),
            PAGE_THREATS => self.threats.len(),
            PAGE_HONEYPOT => self.sessions.len(),
            PAGE_SETTINGS => self.settings.len(),
            _ => 0,
        }
    }

    fn active_cursor_mut(&mut self) -> Option<&mut usize> {
        match self.router.active_page().id.as_str() {
            PAGE_MONITORING => Some(&mut self.inbox_cursor),
            PAGE_THREATS => Some(&mut self.threat_cursor),
            PAGE_HONEYPOT => Some(&mut self.session_cursor),
            PAGE_SETTINGS => Some(&mut self.settings_cursor),
            _ => None,
        }
    }

    pub fn move_up(&mut self) {
        if let Some(cursor) = self.active_cursor_mut() {
            *cursor = cursor.saturating_sub(1);
            self.mark_dirty();
        }
    }

    pub fn move_down(&mut self) {
        let len = self.active_list_len();
        if let Some(cursor) = self.active_cursor_mut() {
            if *cursor + 1 < len {
                *cursor += 1;
            }
            self.mark_dirty();
        }
    }

    /// Keep the inbox cursor on a visible row after the filter changed.
    pub fn clamp_inbox_cursor(&mut self) {
        let visible = self.inbox.visible_count();
        self.inbox_cursor = self.inbox_cursor.min(visible.saturating_sub(1));
    }
}
