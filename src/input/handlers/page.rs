//! Page action handlers.
//!
//! Row-based actions apply to the row under the active page's cursor.

use crate::app::App;
use crate::input::Command;

/// Handles commands bound to a single page.
///
/// Returns `true` if the command was handled.
pub fn handle_page_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::ScanNow => app.scan_now(),
        Command::CycleTimeRange => {
            app.cycle_time_range();
            true
        }

        Command::StartSearch => {
            app.enter_search();
            true
        }
        Command::CycleCategory => {
            app.cycle_filter_category();
            true
        }
        Command::ToggleEmail => app.toggle_selected_email(),
        Command::ToggleSelectAll => {
            app.toggle_select_all();
            true
        }
        Command::ViewEmail => app.view_selected_email(),

        Command::ExportReport => {
            app.export_report();
            true
        }
        Command::ViewThreat => app.view_threat_email(app.threat_cursor),
        Command::DeleteThreat => app.request_delete_threat(app.threat_cursor),

        Command::ToggleHoneypot => {
            app.toggle_honeypot();
            true
        }
        Command::ViewConversation => app.view_conversation(app.session_cursor),
        Command::EndSession => app.request_end_session(app.session_cursor),

        Command::ToggleSetting => app.toggle_setting(app.settings_cursor),
        Command::Reconnect => app.reconnect(),

        _ => false,
    }
}
