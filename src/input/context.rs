//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the parts of application state that decide
//! how a key is interpreted: the active page and any open modal.

use crate::models::page::PAGE_DASHBOARD;

/// The modal state that captures keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Confirmation dialog is open
    Confirm,
    /// Search box on the Email Monitor page has focus
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputContext {
    /// Id of the active page
    pub page: String,
    pub modal: ModalType,
}

impl Default for InputContext {
    fn default() -> Self {
        Self {
            page: PAGE_DASHBOARD.to_string(),
            modal: ModalType::None,
        }
    }
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = page.into();
        self
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}
