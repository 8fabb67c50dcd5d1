//! Threats page: export button and one card per detected threat.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::helpers::{button, truncate_string};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{risk_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

/// Title row, sender row, indicators row, buttons row, plus borders
const CARD_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, _ctx: &LayoutContext) {
    if area.height < 2 {
        return;
    }

    let (export, _) = button(
        &mut app.hit_areas,
        "Export Report",
        area.x + 1,
        area.y,
        area,
        ClickAction::ExportReport,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), export])),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let list = Rect::new(area.x, area.y + 2, area.width, area.height.saturating_sub(2));
    if app.threats.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(" No active threats", Style::default().fg(COLOR_DIM))),
            list,
        );
        return;
    }

    let fit = (list.height / CARD_HEIGHT).max(1) as usize;
    let offset = app.threat_cursor.saturating_sub(fit - 1);

    for (slot, idx) in (offset..app.threats.len()).take(fit).enumerate() {
        let rect = Rect::new(list.x, list.y + slot as u16 * CARD_HEIGHT, list.width, CARD_HEIGHT)
            .intersection(list);
        if rect.height < 3 {
            break;
        }
        render_card(frame, rect, app, idx);
    }
}

fn render_card(frame: &mut Frame, rect: Rect, app: &mut App, idx: usize) {
    let card = &app.threats[idx];
    let is_cursor = idx == app.threat_cursor;
    let dim = Style::default().fg(COLOR_DIM);

    let border = if card.faded {
        dim
    } else if is_cursor {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    };
    let risk_style = if card.faded {
        dim
    } else {
        Style::default()
            .fg(risk_color(&card.risk))
            .add_modifier(Modifier::BOLD)
    };
    let title_style = if card.faded {
        dim
    } else {
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(Span::styled(format!(" {} Risk ", card.risk), risk_style));
    let inner = block.inner(rect);

    let width = inner.width as usize;
    let mut lines = vec![
        Line::from(Span::styled(truncate_string(&card.title, width), title_style)),
        Line::from(Span::styled(
            truncate_string(&format!("From: {}", card.sender), width),
            if card.faded { dim } else { Style::default().fg(COLOR_TEXT) },
        )),
        Line::from(Span::styled(
            truncate_string(&card.indicators.join(" · "), width),
            dim,
        )),
    ];
    let faded = card.faded;
    frame.render_widget(block, rect);

    let button_row = inner.y + 3;
    if faded {
        lines.push(Line::from(Span::styled("Blocked", dim)));
    } else if button_row < inner.y + inner.height {
        let (view, end) = button(
            &mut app.hit_areas,
            "View Email",
            inner.x,
            button_row,
            inner,
            ClickAction::ViewThreat(idx),
        );
        let (delete, _) = button(
            &mut app.hit_areas,
            "Delete & Block",
            end + 2,
            button_row,
            inner,
            ClickAction::DeleteThreat(idx),
        );
        lines.push(Line::from(vec![view, Span::raw("  "), delete]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
