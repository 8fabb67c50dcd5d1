//! Input handling module for keyboard and command processing.
//!
//! All keyboard input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to handlers in the [`handlers`] module
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! ```ignore
//! use genjutsu::input::CommandRegistry;
//!
//! let registry = CommandRegistry::new();
//! let context = app.build_input_context();
//!
//! if let Some(cmd) = registry.dispatch(key_event, &context) {
//!     app.execute_command(cmd);
//! }
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crate::app::{App, InputMode};

impl App {
    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        let modal = if self.confirm.is_some() {
            ModalType::Confirm
        } else if self.input_mode == InputMode::Search {
            ModalType::Search
        } else {
            ModalType::None
        };

        InputContext {
            page: self.router.active_page().id.clone(),
            modal,
        }
    }

    /// Executes a command, delegating to the appropriate handler.
    ///
    /// Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        match self.build_input_context().modal {
            ModalType::Confirm => return handlers::handle_confirm_command(self, &cmd),
            ModalType::Search => {
                if handlers::handle_search_command(self, &cmd) {
                    return true;
                }
            }
            ModalType::None => {}
        }

        if handlers::handle_navigation_command(self, &cmd) {
            return true;
        }

        handlers::handle_page_command(self, &cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::models::page::{PAGE_MONITORING, PAGE_THREATS};

    fn create_test_app() -> App {
        App::new(DashboardConfig::default().with_simulation(false))
    }

    #[test]
    fn test_build_input_context_default() {
        let app = create_test_app();
        let ctx = app.build_input_context();
        assert_eq!(ctx.page, "dashboard");
        assert_eq!(ctx.modal, ModalType::None);
    }

    #[test]
    fn test_confirm_takes_priority_over_search() {
        let mut app = create_test_app();
        app.activate_page(PAGE_MONITORING);
        app.enter_search();
        assert_eq!(app.build_input_context().modal, ModalType::Search);

        app.request_end_session(0);
        app.input_mode = InputMode::Search;
        assert_eq!(app.build_input_context().modal, ModalType::Confirm);
    }

    #[test]
    fn test_execute_quit() {
        let mut app = create_test_app();
        assert!(app.execute_command(Command::Quit));
        assert!(app.should_quit);
    }

    #[test]
    fn test_confirm_swallows_navigation() {
        let mut app = create_test_app();
        app.activate_page(PAGE_THREATS);
        app.request_delete_threat(0);
        assert!(app.execute_command(Command::NextPage));
        assert!(app.router.is_active(PAGE_THREATS));
        assert!(app.confirm.is_some());
    }

    #[test]
    fn test_search_typing_filters_inbox() {
        let mut app = create_test_app();
        app.execute_command(Command::ActivatePage(PAGE_MONITORING.to_string()));
        app.execute_command(Command::StartSearch);
        for c in "INVOICE".chars() {
            app.execute_command(Command::SearchChar(c));
        }
        assert_eq!(app.inbox.query_input(), "INVOICE");
        assert!(app.inbox.visible_count() > 0);
        assert!(app.inbox.visible_count() < app.inbox.items().len());

        app.execute_command(Command::SearchDone);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_noop_is_unhandled() {
        let mut app = create_test_app();
        app.needs_redraw = false;
        assert!(!app.execute_command(Command::Noop));
        assert!(!app.needs_redraw);
    }
}
