//! Modal command handlers: the confirmation prompt and the search box.

use crate::app::App;
use crate::input::Command;

/// Handles confirmation prompt commands.
pub fn handle_confirm_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::ConfirmYes => {
            app.confirm_accept();
            true
        }
        Command::ConfirmNo => {
            app.confirm_decline();
            true
        }
        // Everything else is swallowed while the prompt is open
        _ => true,
    }
}

/// Handles search box commands.
pub fn handle_search_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::SearchChar(c) => {
            app.push_search_char(*c);
            true
        }
        Command::SearchBackspace => {
            app.pop_search_char();
            true
        }
        Command::SearchDone => {
            app.leave_search();
            true
        }
        _ => false,
    }
}
