//! Navigation command handlers.

use crate::app::App;
use crate::input::Command;

/// Handles navigation-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => {
            app.quit();
            true
        }
        Command::ActivatePage(page_id) => app.activate_page(page_id),
        Command::NextPage => {
            app.next_page();
            true
        }
        Command::PreviousPage => {
            app.previous_page();
            true
        }
        Command::ToggleSidebar => {
            app.toggle_sidebar();
            true
        }
        Command::OpenNotifications => {
            app.open_notifications();
            true
        }
        Command::DismissToast => {
            app.toast.dismiss();
            true
        }
        Command::MoveUp => {
            app.move_up();
            true
        }
        Command::MoveDown => {
            app.move_down();
            true
        }
        _ => false,
    }
}
