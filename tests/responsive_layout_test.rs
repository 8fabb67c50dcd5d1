// Integration tests for responsive layout behavior
// Renders every page at:
// - 40x20 (mobile-like)
// - 80x24 (standard terminal, at the narrow breakpoint)
// - 120x40 (wide terminal)
// - 200x50 (ultra-wide)

mod common;

use common::{buffer_text, draw, test_app};
use genjutsu::models::default_pages;
use genjutsu::models::NotificationRequest;
use genjutsu::ui::{toast_rect, LayoutContext, SizeCategory};
use ratatui::layout::Rect;

const SIZES: [(u16, u16); 4] = [(40, 20), (80, 24), (120, 40), (200, 50)];

#[test]
fn test_size_categories() {
    assert_eq!(LayoutContext::new(40, 20, 80).width_category(), SizeCategory::ExtraSmall);
    assert_eq!(LayoutContext::new(80, 24, 80).width_category(), SizeCategory::Narrow);
    assert_eq!(LayoutContext::new(120, 40, 80).width_category(), SizeCategory::Medium);
    assert_eq!(LayoutContext::new(200, 50, 80).width_category(), SizeCategory::Large);
}

#[test]
fn test_breakpoint_is_inclusive() {
    assert!(LayoutContext::new(80, 24, 80).is_narrow());
    assert!(!LayoutContext::new(81, 24, 80).is_narrow());
}

#[test]
fn test_stat_columns_reflow() {
    assert_eq!(LayoutContext::new(40, 20, 80).stat_columns(), 1);
    assert_eq!(LayoutContext::new(200, 50, 80).stat_columns(), 4);
    assert!(LayoutContext::new(100, 30, 80).should_stack_charts());
    assert!(!LayoutContext::new(200, 50, 80).should_stack_charts());
}

#[test]
fn test_every_page_at_every_size() {
    for (width, height) in SIZES {
        let mut app = test_app();
        for page in default_pages() {
            app.activate_page(&page.id);
            let buffer = draw(&mut app, width, height);
            let text = buffer_text(&buffer);
            assert!(
                text.contains(&page.label),
                "{} missing at {}x{}",
                page.label,
                width,
                height
            );
        }
    }
}

#[test]
fn test_sidebar_only_on_wide_layouts() {
    for (width, height) in SIZES {
        let mut app = test_app();
        draw(&mut app, width, height);
        let narrow = width <= 80;
        assert_eq!(app.sidebar_rect.is_some(), !narrow, "at {}x{}", width, height);
        assert_eq!(app.toggle_rect.is_some(), narrow, "at {}x{}", width, height);
    }
}

#[tokio::test]
async fn test_toast_drawn_top_right() {
    let mut app = test_app();
    app.notify(NotificationRequest::danger(
        "New Threat Detected!",
        "Phishing attempt blocked",
    ));
    let buffer = draw(&mut app, 120, 40);
    let text = buffer_text(&buffer);
    assert!(text.contains("New Threat Detected!"));

    let rect = toast_rect(Rect::new(0, 0, 120, 40));
    let title_row: String = (rect.x..rect.x + rect.width)
        .map(|x| buffer[(x, rect.y + 1)].symbol().to_string())
        .collect();
    assert!(title_row.contains("New Threat"));
}
