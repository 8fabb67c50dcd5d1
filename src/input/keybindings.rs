//! Default keybindings for the application.
//!
//! Maps key combinations to commands: a global table, one table per modal
//! and one table per page.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::models::default_pages;
use crate::models::page::{
    PAGE_DASHBOARD, PAGE_HONEYPOT, PAGE_MONITORING, PAGE_SETTINGS, PAGE_THREATS,
};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (active whenever no modal captures the key)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per page id
    pub page: HashMap<&'static str, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            page: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_page_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        let global = &mut self.global;
        global.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        global.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);

        global.insert(KeyCombo::plain(KeyCode::Tab), Command::NextPage);
        // Terminals disagree on whether BackTab carries SHIFT
        global.insert(KeyCombo::plain(KeyCode::BackTab), Command::PreviousPage);
        global.insert(KeyCombo::shift(KeyCode::BackTab), Command::PreviousPage);

        for page in default_pages() {
            global.insert(
                KeyCombo::plain(KeyCode::Char(page.shortcut)),
                Command::ActivatePage(page.id),
            );
        }

        global.insert(KeyCombo::plain(KeyCode::Char('m')), Command::ToggleSidebar);
        global.insert(KeyCombo::plain(KeyCode::Char('n')), Command::OpenNotifications);
        global.insert(KeyCombo::plain(KeyCode::Esc), Command::DismissToast);

        global.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        global.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        global.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        global.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
    }

    fn setup_modal_bindings(&mut self) {
        let mut confirm = HashMap::new();
        confirm.insert(KeyCombo::plain(KeyCode::Char('y')), Command::ConfirmYes);
        confirm.insert(KeyCombo::shift(KeyCode::Char('Y')), Command::ConfirmYes);
        confirm.insert(KeyCombo::plain(KeyCode::Enter), Command::ConfirmYes);
        confirm.insert(KeyCombo::plain(KeyCode::Char('n')), Command::ConfirmNo);
        confirm.insert(KeyCombo::shift(KeyCode::Char('N')), Command::ConfirmNo);
        confirm.insert(KeyCombo::plain(KeyCode::Esc), Command::ConfirmNo);
        self.modal.insert(ModalType::Confirm, confirm);

        let mut search = HashMap::new();
        search.insert(KeyCombo::plain(KeyCode::Esc), Command::SearchDone);
        search.insert(KeyCombo::plain(KeyCode::Enter), Command::SearchDone);
        search.insert(KeyCombo::plain(KeyCode::Backspace), Command::SearchBackspace);
        self.modal.insert(ModalType::Search, search);
    }

    fn setup_page_bindings(&mut self) {
        let mut dashboard = HashMap::new();
        dashboard.insert(KeyCombo::plain(KeyCode::Char('s')), Command::ScanNow);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('t')), Command::CycleTimeRange);
        self.page.insert(PAGE_DASHBOARD, dashboard);

        let mut monitoring = HashMap::new();
        monitoring.insert(KeyCombo::plain(KeyCode::Char('/')), Command::StartSearch);
        monitoring.insert(KeyCombo::plain(KeyCode::Char('f')), Command::CycleCategory);
        monitoring.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleEmail);
        monitoring.insert(KeyCombo::plain(KeyCode::Char('a')), Command::ToggleSelectAll);
        monitoring.insert(KeyCombo::plain(KeyCode::Enter), Command::ViewEmail);
        self.page.insert(PAGE_MONITORING, monitoring);

        let mut threats = HashMap::new();
        threats.insert(KeyCombo::plain(KeyCode::Char('e')), Command::ExportReport);
        threats.insert(KeyCombo::plain(KeyCode::Char('v')), Command::ViewThreat);
        threats.insert(KeyCombo::plain(KeyCode::Enter), Command::ViewThreat);
        threats.insert(KeyCombo::plain(KeyCode::Char('d')), Command::DeleteThreat);
        self.page.insert(PAGE_THREATS, threats);

        let mut honeypot = HashMap::new();
        honeypot.insert(KeyCombo::plain(KeyCode::Char('h')), Command::ToggleHoneypot);
        honeypot.insert(KeyCombo::plain(KeyCode::Char('v')), Command::ViewConversation);
        honeypot.insert(KeyCombo::plain(KeyCode::Enter), Command::ViewConversation);
        honeypot.insert(KeyCombo::plain(KeyCode::Char('x')), Command::EndSession);
        self.page.insert(PAGE_HONEYPOT, honeypot);

        let mut settings = HashMap::new();
        settings.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleSetting);
        settings.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleSetting);
        settings.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Reconnect);
        self.page.insert(PAGE_SETTINGS, settings);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_page(&self, page: &str, combo: &KeyCombo) -> Option<&Command> {
        self.page.get(page).and_then(|m| m.get(combo))
    }
}
