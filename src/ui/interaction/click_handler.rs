//! Click action handler for mouse interaction.
//!
//! Translates clicks on registered hit areas into App mutations.

use ratatui::layout::Rect;

use super::hit_area::ClickAction;
use crate::app::App;
use crate::state::Category;

fn rect_contains(rect: Option<Rect>, x: u16, y: u16) -> bool {
    rect.is_some_and(|r| {
        x >= r.x && x < r.x.saturating_add(r.width) && y >= r.y && y < r.y.saturating_add(r.height)
    })
}

/// Handle a left click at a terminal cell.
///
/// While the confirmation dialog is open only its buttons respond. A click
/// that lands outside both the sidebar and its toggle collapses the sidebar.
pub fn handle_mouse_click(app: &mut App, x: u16, y: u16) {
    let action = app.hit_areas.hit_test(x, y);

    if app.confirm.is_some() {
        if let Some(action @ (ClickAction::ConfirmYes | ClickAction::ConfirmNo)) = action {
            handle_click_action(app, action);
        }
        return;
    }

    if let Some(action) = action {
        handle_click_action(app, action);
    }

    let inside_sidebar = rect_contains(app.sidebar_rect, x, y);
    let inside_toggle = rect_contains(app.toggle_rect, x, y);
    if app.router.handle_outside_click(inside_sidebar, inside_toggle) {
        app.mark_dirty();
    }
}

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();
    tracing::debug!(?action, "Click");

    match action {
        ClickAction::NavigatePage(page_id) => {
            app.activate_page(&page_id);
        }
        ClickAction::ToggleSidebar => app.toggle_sidebar(),
        ClickAction::OpenNotifications => app.open_notifications(),
        ClickAction::DismissToast => app.toast.dismiss(),
        ClickAction::Backdrop => {}

        ClickAction::ScanNow => {
            app.scan_now();
        }
        ClickAction::CycleTimeRange => app.cycle_time_range(),

        ClickAction::FilterCategory(name) => app.set_filter_category(Category::parse(&name)),
        ClickAction::FocusSearch => app.enter_search(),
        ClickAction::ToggleEmail(id) => {
            app.toggle_email(&id);
        }
        ClickAction::ToggleSelectAll => app.toggle_select_all(),
        ClickAction::ViewEmail(index) => {
            app.inbox_cursor = index;
            app.view_selected_email();
        }

        ClickAction::ExportReport => app.export_report(),
        ClickAction::ViewThreat(index) => {
            app.threat_cursor = index;
            app.view_threat_email(index);
        }
        ClickAction::DeleteThreat(index) => {
            app.threat_cursor = index;
            app.request_delete_threat(index);
        }

        ClickAction::ToggleHoneypot => app.toggle_honeypot(),
        ClickAction::ViewConversation(index) => {
            app.session_cursor = index;
            app.view_conversation(index);
        }
        ClickAction::EndSession(index) => {
            app.session_cursor = index;
            app.request_end_session(index);
        }

        ClickAction::ToggleSetting(index) => {
            app.settings_cursor = index;
            app.toggle_setting(index);
        }
        ClickAction::Reconnect => {
            app.reconnect();
        }

        ClickAction::ConfirmYes => app.confirm_accept(),
        ClickAction::ConfirmNo => app.confirm_decline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::models::page::{PAGE_DASHBOARD, PAGE_MONITORING, PAGE_THREATS};

    fn app() -> App {
        App::new(DashboardConfig::default().with_simulation(false))
    }

    #[test]
    fn test_nav_click_activates_page() {
        let mut app = app();
        handle_click_action(&mut app, ClickAction::NavigatePage(PAGE_THREATS.to_string()));
        assert!(app.router.is_active(PAGE_THREATS));
        assert!(app.router.is_nav_active(PAGE_THREATS));
    }

    #[test]
    fn test_outside_click_collapses_narrow_sidebar() {
        let mut app = app();
        app.update_terminal_dimensions(60, 30);
        app.toggle_sidebar();
        app.sidebar_rect = Some(Rect::new(0, 0, 20, 30));
        app.toggle_rect = Some(Rect::new(22, 0, 3, 1));

        handle_mouse_click(&mut app, 5, 5);
        assert!(app.router.sidebar_open());

        handle_mouse_click(&mut app, 23, 0);
        assert!(app.router.sidebar_open());

        handle_mouse_click(&mut app, 50, 20);
        assert!(!app.router.sidebar_open());
    }

    #[test]
    fn test_outside_click_ignored_on_wide_layout() {
        let mut app = app();
        app.update_terminal_dimensions(140, 40);
        app.toggle_sidebar();
        app.sidebar_rect = Some(Rect::new(0, 0, 20, 40));
        handle_mouse_click(&mut app, 100, 20);
        assert!(app.router.sidebar_open());
    }

    #[test]
    fn test_dialog_blocks_page_clicks() {
        let mut app = app();
        app.activate_page(PAGE_THREATS);
        app.request_delete_threat(0);
        app.hit_areas.register(Rect::new(0, 0, 80, 1), ClickAction::NavigatePage(PAGE_DASHBOARD.to_string()), None);
        handle_mouse_click(&mut app, 10, 0);
        assert!(app.router.is_active(PAGE_THREATS));
        assert!(app.confirm.is_some());

        app.hit_areas.register(Rect::new(30, 10, 6, 1), ClickAction::ConfirmNo, None);
        handle_mouse_click(&mut app, 31, 10);
        assert!(app.confirm.is_none());
        assert!(!app.threats[0].faded);
    }

    #[test]
    fn test_chip_click_filters_inbox() {
        let mut app = app();
        app.activate_page(PAGE_MONITORING);
        handle_click_action(&mut app, ClickAction::FilterCategory("malware".to_string()));
        assert!(app.inbox.visible_items().all(|e| e.has_category("malware")));
    }

    #[test]
    fn test_select_all_click() {
        let mut app = app();
        handle_click_action(&mut app, ClickAction::ToggleSelectAll);
        let selection = app.selection.as_ref().unwrap();
        assert_eq!(selection.checked_count(), selection.len());
    }
}
