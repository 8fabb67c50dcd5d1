//! Toast overlay in the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::interaction::ClickAction;
use super::theme::{severity_color, COLOR_DIALOG_BG, COLOR_DIM, COLOR_TEXT};
use crate::app::App;

const TOAST_MAX_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 4;
const CLOSE: &str = "✕";

/// Where the toast goes inside `area`.
pub fn toast_rect(area: Rect) -> Rect {
    let width = TOAST_MAX_WIDTH.min(area.width.saturating_sub(2));
    let height = TOAST_HEIGHT.min(area.height);
    Rect::new(
        (area.x + area.width).saturating_sub(width + 1),
        area.y + 1.min(area.height.saturating_sub(height)),
        width,
        height,
    )
}

pub fn render_toast(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(request) = app.toast.current() else {
        return;
    };
    let rect = toast_rect(area);
    if rect.width < 10 || rect.height < 3 {
        return;
    }

    let accent = severity_color(request.severity);
    frame.render_widget(Clear, rect);
    app.hit_areas.register(rect, ClickAction::Backdrop, None);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", request.severity.icon()), Style::default().fg(accent)),
            Span::styled(
                request.title.clone(),
                Style::default()
                    .fg(accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(request.message.clone(), Style::default().fg(COLOR_TEXT))),
    ];
    let text_area = Rect::new(inner.x, inner.y, inner.width.saturating_sub(2), inner.height);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), text_area);

    let close_rect = Rect::new((inner.x + inner.width).saturating_sub(1), inner.y, 1, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE, Style::default().fg(COLOR_DIM))),
        close_rect,
    );
    app.hit_areas
        .register(close_rect, ClickAction::DismissToast, None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_rect_top_right() {
        let rect = toast_rect(Rect::new(0, 0, 120, 40));
        assert_eq!(rect, Rect::new(71, 1, 48, 4));
    }

    #[test]
    fn test_toast_rect_shrinks_on_small_terminal() {
        let rect = toast_rect(Rect::new(0, 0, 30, 10));
        assert_eq!(rect.width, 28);
        assert_eq!(rect.x, 1);
    }
}
