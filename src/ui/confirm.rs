//! Confirmation dialog for destructive actions.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::button;
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{COLOR_DIM, COLOR_TEXT};
use crate::app::App;

pub fn render_confirm(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let Some(pending) = app.confirm.as_ref() else {
        return;
    };
    let prompt: Vec<Line> = pending
        .prompt
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(COLOR_TEXT))))
        .collect();

    // Prompt lines, a spacer, the buttons, the hint
    let content_height = prompt.len() as u16 + 3;
    let config = DialogFrameConfig::new("Confirm", content_height).max_width(64);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    if inner.height < 2 {
        return;
    }

    let prompt_height = inner.height.saturating_sub(3).max(1);
    frame.render_widget(
        Paragraph::new(prompt).wrap(Wrap { trim: false }),
        Rect::new(inner.x, inner.y, inner.width, prompt_height),
    );

    let button_row = (inner.y + prompt_height + 1).min(inner.y + inner.height - 1);
    let (yes, end) = button(
        &mut app.hit_areas,
        "Yes",
        inner.x + 1,
        button_row,
        inner,
        ClickAction::ConfirmYes,
    );
    let (no, _) = button(
        &mut app.hit_areas,
        "No",
        end + 2,
        button_row,
        inner,
        ClickAction::ConfirmNo,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), yes, Span::raw("  "), no])),
        Rect::new(inner.x, button_row, inner.width, 1),
    );

    let hint_row = button_row + 1;
    if hint_row < inner.y + inner.height {
        frame.render_widget(
            Paragraph::new(Span::styled(" y / n", Style::default().fg(COLOR_DIM))),
            Rect::new(inner.x, hint_row, inner.width, 1),
        );
    }
}
