//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum is every user action a key can trigger, decoupling
//! key bindings from their effects.

/// Represents all possible commands that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Activate the page with this id (1-5)
    ActivatePage(String),
    /// Next page (Tab)
    NextPage,
    /// Previous page (Shift+Tab)
    PreviousPage,
    /// Expand or collapse the sidebar (m)
    ToggleSidebar,
    /// Notification badge (n)
    OpenNotifications,
    /// Hide the toast (Esc)
    DismissToast,
    /// Move the list cursor up (Up, k)
    MoveUp,
    /// Move the list cursor down (Down, j)
    MoveDown,

    // =========================================================================
    // Dashboard
    // =========================================================================
    ScanNow,
    CycleTimeRange,

    // =========================================================================
    // Email Monitor
    // =========================================================================
    /// Focus the search box (/)
    StartSearch,
    /// Select the next category chip (f)
    CycleCategory,
    /// Toggle the checkbox under the cursor (Space)
    ToggleEmail,
    /// Toggle the select-all checkbox (a)
    ToggleSelectAll,
    /// Show the email under the cursor (Enter)
    ViewEmail,

    // =========================================================================
    // Threats
    // =========================================================================
    ExportReport,
    ViewThreat,
    DeleteThreat,

    // =========================================================================
    // Honeypot
    // =========================================================================
    ToggleHoneypot,
    ViewConversation,
    EndSession,

    // =========================================================================
    // Settings
    // =========================================================================
    ToggleSetting,
    Reconnect,

    // =========================================================================
    // Modal Commands
    // =========================================================================
    /// Accept the confirmation prompt (y, Enter)
    ConfirmYes,
    /// Decline the confirmation prompt (n, Esc)
    ConfirmNo,
    /// Type into the search box
    SearchChar(char),
    SearchBackspace,
    /// Leave the search box (Esc, Enter)
    SearchDone,

    /// Swallow the key without doing anything
    Noop,
}

impl Command {
    /// Whether executing this command may change what is on screen.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }
}
