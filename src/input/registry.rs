//! Command registry for dispatching keyboard input to commands.
//!
//! Priority, highest first:
//! 1. Ctrl+C, which always quits
//! 2. The open modal, which swallows every other key
//! 3. Bindings of the active page
//! 4. Global bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);

        if context.is_modal_active() {
            return Some(self.dispatch_modal(key, combo, context.modal));
        }

        if let Some(cmd) = self.config.get_page(&context.page, &combo) {
            return Some(cmd.clone());
        }

        self.config.get_global(&combo).cloned()
    }

    fn dispatch_modal(&self, key: KeyEvent, combo: KeyCombo, modal: ModalType) -> Command {
        if let Some(cmd) = self.config.get_modal(modal, &combo) {
            return cmd.clone();
        }

        if modal == ModalType::Search {
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                {
                    return Command::SearchChar(c);
                }
            }
        }

        Command::Noop
    }

    /// Gets the keybinding configuration (for UI display).
    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }
}
