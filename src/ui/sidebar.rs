//! Sidebar navigation.
//!
//! One entry per page; the active entry is highlighted. On narrow terminals
//! the sidebar floats over the page when expanded.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::interaction::ClickAction;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};
use crate::app::App;

const LOGO: &str = "◆ GENJUTSU";

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &mut App, floating: bool) {
    if floating {
        frame.render_widget(Clear, area);
        app.hit_areas.register(area, ClickAction::Backdrop, None);
    }
    app.sidebar_rect = Some(area);

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(if floating {
            Style::default().bg(COLOR_DIALOG_BG)
        } else {
            Style::default()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", LOGO),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let first_entry_row = inner.y + lines.len() as u16;
    for (idx, page) in app.router.pages().iter().enumerate() {
        let active = app.router.is_nav_active(&page.id);
        let (marker, style) = if active {
            (
                "▌",
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (" ", Style::default().fg(COLOR_TEXT))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(format!("{} ", page.shortcut), Style::default().fg(COLOR_DIM)),
            Span::styled(page.label.clone(), style),
        ]));

        let row = first_entry_row + idx as u16;
        if row < inner.y + inner.height {
            app.hit_areas.register(
                Rect::new(inner.x, row, inner.width, 1),
                ClickAction::NavigatePage(page.id.clone()),
                Some(Style::default().bg(COLOR_BORDER)),
            );
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
