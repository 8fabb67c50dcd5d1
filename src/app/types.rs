//! Type definitions for the application state.
//!
//! - [`InputMode`] - Whether keys go to commands or the search box
//! - [`ConfirmAction`] / [`PendingConfirm`] - Destructive actions awaiting a yes/no

/// Where typed characters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the Email Monitor search box
    Search,
}

/// A destructive action gated behind the confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// End the honeypot session with this id
    EndSession { id: String },
    /// Delete the threat email and block its sender
    DeleteThreat { id: String },
}

impl ConfirmAction {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ConfirmAction::EndSession { .. } => "end session",
            ConfirmAction::DeleteThreat { .. } => "delete and block",
        }
    }
}

/// The open confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub action: ConfirmAction,
    /// Question shown in the dialog; may span several lines
    pub prompt: String,
}
