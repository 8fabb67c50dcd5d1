//! Shared helpers for integration tests.

#![allow(dead_code)]

use genjutsu::app::{App, AppMessage};
use genjutsu::config::DashboardConfig;
use genjutsu::models::EmailItem;
use genjutsu::ui;
use genjutsu::ui::interaction::ClickAction;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// An app with the simulated sources switched off.
pub fn test_app() -> App {
    App::new(DashboardConfig::default().with_simulation(false))
}

/// Render one frame at the given size and return the buffer.
pub fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    app.update_terminal_dimensions(width, height);
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer contents as text, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// First cell whose click target satisfies `pred`, scanning row by row.
pub fn find_target<F>(app: &App, width: u16, height: u16, pred: F) -> Option<(u16, u16)>
where
    F: Fn(&ClickAction) -> bool,
{
    for y in 0..height {
        for x in 0..width {
            if let Some(action) = app.hit_areas.hit_test(x, y) {
                if pred(&action) {
                    return Some((x, y));
                }
            }
        }
    }
    None
}

pub fn email(id: &str, sender: &str, subject: &str, preview: &str, tags: &[&str]) -> EmailItem {
    EmailItem::new(id, sender, subject, preview, tags)
}

/// Deliver every message the app's timers have already sent.
pub fn pump(app: &mut App) -> usize {
    let mut count = 0;
    let mut pending: Vec<AppMessage> = Vec::new();
    if let Some(rx) = app.message_rx.as_mut() {
        while let Ok(msg) = rx.try_recv() {
            pending.push(msg);
        }
    }
    for msg in pending {
        app.handle_message(msg);
        count += 1;
    }
    count
}
