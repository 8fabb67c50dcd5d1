//! UI rendering for the Genjutsu dashboard.
//!
//! Layout, top to bottom:
//! - Sidebar on the left (floating over the page on narrow terminals)
//! - Header with the sidebar toggle, page title and threat badge
//! - The active page body
//! - Toast and confirmation dialog overlays
//!
//! ## Responsive Layout System
//!
//! Every render function receives a [`LayoutContext`] built from the frame
//! size. The terminal width plays the role of the viewport width: at or
//! below the narrow breakpoint the sidebar collapses behind a toggle, stat
//! cards reflow into fewer columns and the charts stack.
//!
//! Render also registers click targets in `app.hit_areas`, so the hit map
//! always matches what is on screen.

pub mod components;
mod confirm;
mod header;
mod helpers;
pub mod interaction;
pub mod layout;
pub mod pages;
mod sidebar;
pub mod theme;
mod toast;

pub use header::badge_text;
pub use helpers::truncate_string;
pub use layout::{breakpoints, LayoutContext, SizeCategory, HEADER_HEIGHT, SIDEBAR_WIDTH};
pub use toast::toast_rect;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use confirm::render_confirm;
use header::render_header;
use pages::render_page;
use sidebar::render_sidebar;
use toast::render_toast;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole dashboard and rebuild the click map.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();
    app.sidebar_rect = None;
    app.toggle_rect = None;

    let area = frame.area();
    let ctx = LayoutContext::from_rect(area, app.config.narrow_breakpoint);
    let sidebar_width = SIDEBAR_WIDTH.min(area.width);

    let main = if ctx.is_narrow() {
        area
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(area);
        render_sidebar(frame, columns[0], app, false);
        columns[1]
    };

    render_main(frame, main, app, &ctx);

    // Drawn after the page so it sits on top
    if ctx.is_narrow() && app.router.sidebar_open() {
        let floating = Rect::new(area.x, area.y, sidebar_width, area.height);
        render_sidebar(frame, floating, app, true);
    }

    render_toast(frame, area, app);
    if app.confirm.is_some() {
        render_confirm(frame, area, app, &ctx);
    }

    apply_hover(frame, app);
}

fn render_main(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_header(frame, rows[0], app, ctx);
    let body = Rect::new(
        rows[1].x + 1,
        rows[1].y,
        rows[1].width.saturating_sub(2),
        rows[1].height,
    );
    render_page(frame, body, app, ctx);
}

/// Highlight the click target under the pointer.
fn apply_hover(frame: &mut Frame, app: &mut App) {
    let Some((x, y)) = app.mouse_position else {
        return;
    };
    app.hit_areas.update_hover(x, y);
    let Some(hovered) = app.hit_areas.get_hovered() else {
        return;
    };
    if let Some(style) = hovered.hover_style {
        let rect = hovered.rect.intersection(frame.area());
        frame.buffer_mut().set_style(rect, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::models::page::{PAGE_MONITORING, PAGE_SETTINGS, PAGE_THREATS};
    use crate::ui::interaction::ClickAction;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn create_test_app() -> App {
        App::new(DashboardConfig::default().with_simulation(false))
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        app.update_terminal_dimensions(width, height);
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_wide_layout_shows_sidebar_and_title() {
        let mut app = create_test_app();
        let text = buffer_text(&draw(&mut app, 140, 40));
        assert!(text.contains("GENJUTSU"));
        assert!(text.contains("Email Monitor"));
        assert!(app.sidebar_rect.is_some());
        assert!(app.toggle_rect.is_none());
    }

    #[test]
    fn test_narrow_layout_hides_sidebar_until_toggled() {
        let mut app = create_test_app();
        draw(&mut app, 70, 30);
        assert!(app.sidebar_rect.is_none());
        assert!(app.toggle_rect.is_some());

        app.toggle_sidebar();
        let text = buffer_text(&draw(&mut app, 70, 30));
        assert!(app.sidebar_rect.is_some());
        assert!(text.contains("GENJUTSU"));
    }

    #[test]
    fn test_render_registers_nav_targets() {
        let mut app = create_test_app();
        draw(&mut app, 140, 40);
        let rect = app.sidebar_rect.unwrap();
        let found = (rect.y..rect.y + rect.height)
            .any(|y| matches!(app.hit_areas.hit_test(rect.x + 2, y), Some(ClickAction::NavigatePage(_))));
        assert!(found);
    }

    #[test]
    fn test_every_page_renders() {
        let mut app = create_test_app();
        for page in [PAGE_MONITORING, PAGE_THREATS, "honeypot", PAGE_SETTINGS] {
            app.activate_page(page);
            let text = buffer_text(&draw(&mut app, 140, 40));
            assert!(text.contains(app.router.title()), "title missing on {}", page);
        }
    }

    #[test]
    fn test_threats_page_lists_cards() {
        let mut app = create_test_app();
        app.activate_page(PAGE_THREATS);
        let text = buffer_text(&draw(&mut app, 140, 40));
        assert!(text.contains("Export Report"));
        assert!(text.contains("Fake Bank Verification Request"));
    }

    #[test]
    fn test_stat_cards_reported_visible() {
        let mut app = create_test_app();
        draw(&mut app, 140, 40);
        assert!(!app.visible_stats.is_empty());
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = create_test_app();
        for page in [PAGE_MONITORING, PAGE_THREATS, "honeypot", PAGE_SETTINGS, "dashboard"] {
            app.activate_page(page);
            draw(&mut app, 12, 5);
        }
    }

    #[test]
    fn test_confirm_dialog_registers_buttons() {
        let mut app = create_test_app();
        app.activate_page(PAGE_THREATS);
        app.request_delete_threat(0);
        let text = buffer_text(&draw(&mut app, 140, 40));
        assert!(text.contains("Confirm"));
        assert!(text.contains("[ Yes ]"));
    }
}
