//! End-to-end flows through the same paths the event loop uses:
//! keys go through the command registry, clicks through the hit map built
//! by the last render, and timers report back as messages.

mod common;

use std::time::Duration;

use common::{draw, find_target, pump, test_app};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use genjutsu::app::{frame_ticker, App};
use genjutsu::input::CommandRegistry;
use genjutsu::models::page::{PAGE_DASHBOARD, PAGE_MONITORING, PAGE_THREATS};
use genjutsu::models::{NotificationRequest, Severity};
use genjutsu::state::TriState;
use genjutsu::ui::interaction::{handle_mouse_click, ClickAction};
use genjutsu::ui::toast_rect;
use ratatui::layout::Rect;

fn press(app: &mut App, registry: &CommandRegistry, code: KeyCode) {
    press_with(app, registry, code, KeyModifiers::NONE);
}

fn press_with(app: &mut App, registry: &CommandRegistry, code: KeyCode, modifiers: KeyModifiers) {
    let context = app.build_input_context();
    if let Some(cmd) = registry.dispatch(KeyEvent::new(code, modifiers), &context) {
        app.execute_command(cmd);
    }
}

fn type_text(app: &mut App, registry: &CommandRegistry, text: &str) {
    for c in text.chars() {
        press(app, registry, KeyCode::Char(c));
    }
}

// =============================================================================
// Keyboard
// =============================================================================

#[test]
fn test_number_keys_switch_pages() {
    let registry = CommandRegistry::new();
    let mut app = test_app();
    press(&mut app, &registry, KeyCode::Char('3'));
    assert!(app.router.is_active(PAGE_THREATS));
    press(&mut app, &registry, KeyCode::Tab);
    assert_eq!(app.router.title(), "Honeypot");
    press(&mut app, &registry, KeyCode::BackTab);
    press(&mut app, &registry, KeyCode::BackTab);
    assert_eq!(app.router.title(), "Email Monitor");
}

#[test]
fn test_ctrl_c_quits_even_with_dialog_open() {
    let registry = CommandRegistry::new();
    let mut app = test_app();
    app.request_end_session(0);
    press_with(&mut app, &registry, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit);
}

#[test]
fn test_search_and_category_from_keyboard() {
    let registry = CommandRegistry::new();
    let mut app = test_app();
    press(&mut app, &registry, KeyCode::Char('2'));
    assert!(app.router.is_active(PAGE_MONITORING));

    press(&mut app, &registry, KeyCode::Char('/'));
    // Digits are search text now, not page shortcuts
    type_text(&mut app, &registry, "invoice 1");
    assert!(app.router.is_active(PAGE_MONITORING));
    press(&mut app, &registry, KeyCode::Backspace);
    press(&mut app, &registry, KeyCode::Backspace);
    press(&mut app, &registry, KeyCode::Enter);
    assert_eq!(app.inbox.query_input(), "invoice");

    let visible: Vec<_> = app.inbox.visible_items().map(|e| e.id.clone()).collect();
    assert_eq!(visible, vec!["email-2", "email-4", "email-7"]);

    // All -> Phishing
    press(&mut app, &registry, KeyCode::Char('f'));
    let visible: Vec<_> = app.inbox.visible_items().map(|e| e.id.clone()).collect();
    assert_eq!(visible, vec!["email-2", "email-7"]);
}

#[test]
fn test_select_all_from_keyboard() {
    let registry = CommandRegistry::new();
    let mut app = test_app();
    press(&mut app, &registry, KeyCode::Char('2'));
    press(&mut app, &registry, KeyCode::Char(' '));
    assert_eq!(app.selection.as_ref().unwrap().aggregate(), TriState::Indeterminate);
    press(&mut app, &registry, KeyCode::Char('a'));
    assert_eq!(app.selection.as_ref().unwrap().aggregate(), TriState::Checked);
    press(&mut app, &registry, KeyCode::Char('a'));
    assert_eq!(app.selection.as_ref().unwrap().aggregate(), TriState::Unchecked);
}

#[tokio::test(start_paused = true)]
async fn test_delete_threat_decline_then_accept() {
    let registry = CommandRegistry::new();
    let mut app = test_app();
    press(&mut app, &registry, KeyCode::Char('3'));
    let count = app.threats.len();

    press(&mut app, &registry, KeyCode::Char('d'));
    assert!(app.confirm.is_some());
    // Navigation is swallowed while the dialog is open
    press(&mut app, &registry, KeyCode::Char('1'));
    assert!(app.router.is_active(PAGE_THREATS));
    press(&mut app, &registry, KeyCode::Char('n'));
    assert!(app.confirm.is_none());
    assert_eq!(app.threats.len(), count);
    assert!(!app.toast.is_visible());

    press(&mut app, &registry, KeyCode::Char('d'));
    press(&mut app, &registry, KeyCode::Char('y'));
    assert!(app.threats[0].faded);
    let toast = app.toast.current().unwrap();
    assert_eq!(toast.title, "Threat Blocked");
    assert_eq!(toast.severity, Severity::Success);

    tokio::time::sleep(Duration::from_millis(1001)).await;
    pump(&mut app);
    assert_eq!(app.threats.len(), count - 1);
}

#[tokio::test(start_paused = true)]
async fn test_scan_keeps_toast_until_timer() {
    let registry = CommandRegistry::new();
    let mut app = test_app();
    press(&mut app, &registry, KeyCode::Char('s'));
    assert!(app.scan_in_flight);

    tokio::time::sleep(Duration::from_millis(2001)).await;
    pump(&mut app);
    assert_eq!(app.toast.current().unwrap().title, "Scan Complete");

    // Default dismiss delay is five seconds
    tokio::time::sleep(Duration::from_millis(5001)).await;
    pump(&mut app);
    assert!(!app.toast.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_newer_toast_survives_older_deadline() {
    let registry = CommandRegistry::new();
    let mut app = test_app();
    press(&mut app, &registry, KeyCode::Char('t'));
    tokio::time::sleep(Duration::from_millis(3000)).await;
    press(&mut app, &registry, KeyCode::Char('t'));

    tokio::time::sleep(Duration::from_millis(2500)).await;
    pump(&mut app);
    assert_eq!(
        app.toast.current().unwrap().message,
        "Loading data for: Last 90 days"
    );
}

// =============================================================================
// Mouse
// =============================================================================

#[test]
fn test_click_nav_entry() {
    let mut app = test_app();
    draw(&mut app, 140, 40);
    let (x, y) = find_target(&app, 140, 40, |a| {
        *a == ClickAction::NavigatePage(PAGE_THREATS.to_string())
    })
    .expect("threats nav entry");
    handle_mouse_click(&mut app, x, y);
    assert!(app.router.is_active(PAGE_THREATS));
    assert!(!app.router.is_nav_active(PAGE_DASHBOARD));
}

#[tokio::test]
async fn test_click_delete_then_no() {
    let mut app = test_app();
    app.activate_page(PAGE_THREATS);
    draw(&mut app, 140, 40);

    let (x, y) = find_target(&app, 140, 40, |a| *a == ClickAction::DeleteThreat(1))
        .expect("delete button");
    handle_mouse_click(&mut app, x, y);
    assert!(app.confirm.is_some());

    draw(&mut app, 140, 40);
    let (x, y) = find_target(&app, 140, 40, |a| *a == ClickAction::ConfirmNo)
        .expect("no button");
    handle_mouse_click(&mut app, x, y);
    assert!(app.confirm.is_none());
    assert!(app.threats.iter().all(|t| !t.faded));
}

#[test]
fn test_narrow_sidebar_toggle_and_outside_click() {
    let mut app = test_app();
    draw(&mut app, 70, 30);
    let toggle = app.toggle_rect.expect("toggle drawn on narrow layout");
    handle_mouse_click(&mut app, toggle.x, toggle.y);
    assert!(app.router.sidebar_open());

    draw(&mut app, 70, 30);
    let sidebar = app.sidebar_rect.expect("floating sidebar");
    // Inside the sidebar: stays open
    handle_mouse_click(&mut app, sidebar.x + 1, sidebar.y + sidebar.height - 1);
    assert!(app.router.sidebar_open());

    handle_mouse_click(&mut app, 65, 28);
    assert!(!app.router.sidebar_open());
}

#[test]
fn test_blank_floating_sidebar_rows_swallow_clicks() {
    let mut app = test_app();
    draw(&mut app, 70, 30);
    app.toggle_sidebar();
    draw(&mut app, 70, 30);
    let sidebar = app.sidebar_rect.expect("floating sidebar");

    for y in sidebar.y..sidebar.y + sidebar.height {
        for x in sidebar.x..sidebar.x + sidebar.width {
            let action = app.hit_areas.hit_test(x, y);
            assert!(
                matches!(action, Some(ClickAction::NavigatePage(_) | ClickAction::Backdrop)),
                "page target {:?} reachable at ({}, {})",
                action,
                x,
                y
            );
        }
    }

    handle_mouse_click(&mut app, 2, 11);
    assert!(!app.scan_in_flight);
    assert!(app.router.sidebar_open());
    assert!(app.router.is_active(PAGE_DASHBOARD));
}

#[tokio::test]
async fn test_toast_body_swallows_clicks() {
    let mut app = test_app();
    app.notify(NotificationRequest::info("Heads up", "Something happened"));
    draw(&mut app, 120, 40);
    let rect = toast_rect(Rect::new(0, 0, 120, 40));

    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            let action = app.hit_areas.hit_test(x, y);
            assert!(
                matches!(action, Some(ClickAction::DismissToast | ClickAction::Backdrop)),
                "{:?} under the toast at ({}, {})",
                action,
                x,
                y
            );
        }
    }

    handle_mouse_click(&mut app, rect.x + 2, rect.y + 2);
    assert!(app.toast.is_visible());
    assert!(app.router.is_active(PAGE_DASHBOARD));
}

#[test]
fn test_click_checkbox_and_select_all() {
    let mut app = test_app();
    app.activate_page(PAGE_MONITORING);
    draw(&mut app, 140, 40);

    let (x, y) = find_target(&app, 140, 40, |a| {
        *a == ClickAction::ToggleEmail("email-3".to_string())
    })
    .expect("checkbox");
    handle_mouse_click(&mut app, x, y);
    let selection = app.selection.as_ref().unwrap();
    assert!(selection.is_checked("email-3"));
    assert_eq!(selection.aggregate(), TriState::Indeterminate);

    draw(&mut app, 140, 40);
    let (x, y) = find_target(&app, 140, 40, |a| *a == ClickAction::ToggleSelectAll)
        .expect("select all");
    handle_mouse_click(&mut app, x, y);
    assert_eq!(app.selection.as_ref().unwrap().checked_count(), 7);
}

// =============================================================================
// Counters
// =============================================================================

#[test]
fn test_stat_counters_animate_after_first_draw() {
    let mut app = test_app();
    let targets: Vec<String> = app.stats.iter().map(|s| s.text.clone()).collect();

    draw(&mut app, 140, 40);
    app.process_visibility();
    assert!(app.stats.iter().all(|s| s.text == "0"));

    for _ in 0..100 {
        app.tick();
    }
    let after: Vec<String> = app.stats.iter().map(|s| s.text.clone()).collect();
    assert_eq!(after, targets);

    // A second sighting does not restart anything
    draw(&mut app, 140, 40);
    app.process_visibility();
    assert!(app.visible_stats.is_empty());
    let again: Vec<String> = app.stats.iter().map(|s| s.text.clone()).collect();
    assert_eq!(again, targets);
}

#[tokio::test(start_paused = true)]
async fn test_counters_finish_under_constant_input() {
    let mut app = test_app();
    let targets: Vec<String> = app.stats.iter().map(|s| s.text.clone()).collect();
    draw(&mut app, 140, 40);
    app.process_visibility();

    // Pointer motion every 5ms, faster than the frame clock
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_millis(5)).await;
            if tx.send(()).is_err() {
                break;
            }
        }
    });

    let mut ticker = frame_ticker();
    let mut ticks = 0;
    let deadline = tokio::time::Instant::now() + Duration::from_millis(1500);
    while tokio::time::Instant::now() < deadline {
        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
                ticks += 1;
            }
            Some(()) = rx.recv() => {}
        }
    }

    assert!(ticks >= 80, "only {} ticks in 1.5s", ticks);
    let after: Vec<String> = app.stats.iter().map(|s| s.text.clone()).collect();
    assert_eq!(after, targets);
}
