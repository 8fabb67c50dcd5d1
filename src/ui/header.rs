//! Page header: sidebar toggle, page title and notification badge.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::text_rect;
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DANGER, COLOR_DIM, COLOR_HEADER};
use crate::app::App;

const TOGGLE: &str = "☰";

/// Badge text for the number of active threats.
pub fn badge_text(count: usize) -> String {
    format!("⚑ {}", count)
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let y = inner.y + inner.height.saturating_sub(1) / 2;
    let mut spans = vec![Span::raw(" ")];
    let mut x = inner.x + 1;

    // The toggle only exists on narrow layouts
    if ctx.is_narrow() {
        let toggle_rect = text_rect(x, y, TOGGLE, inner);
        app.toggle_rect = Some(toggle_rect);
        app.hit_areas
            .register(toggle_rect, ClickAction::ToggleSidebar, None);
        spans.push(Span::styled(
            TOGGLE,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
        x += TOGGLE.width() as u16 + 2;
    }

    let title = app.router.title().to_string();
    spans.push(Span::styled(
        title.clone(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    x += title.width() as u16;

    let active_threats = app.threats.iter().filter(|t| !t.faded).count();
    let badge = badge_text(active_threats);
    let badge_width = badge.width() as u16;
    let badge_x = (inner.x + inner.width).saturating_sub(badge_width + 1);
    if badge_x > x {
        spans.push(Span::raw(" ".repeat((badge_x - x) as usize)));
        let badge_style = if active_threats > 0 {
            Style::default()
                .fg(COLOR_DANGER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(badge.clone(), badge_style));
        app.hit_areas.register(
            text_rect(badge_x, y, &badge, inner),
            ClickAction::OpenNotifications,
            None,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(inner.x, y, inner.width, 1),
    );
}
