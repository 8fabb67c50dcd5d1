//! Email Monitor page: category chips, search box, select-all and the
//! filtered email list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode};
use crate::state::{TriState, CATEGORY_CHIPS};
use crate::ui::components::{render_tab_selector, TabItem};
use crate::ui::helpers::{cursor_style, text_rect, truncate_string};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{category_color, COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

fn chip_label(name: &str) -> &'static str {
    match name {
        "all" => "All",
        "phishing" => "Phishing",
        "malware" => "Malware",
        "spoofing" => "Spoofing",
        "safe" => "Safe",
        _ => "Other",
    }
}

/// First row to draw so the cursor stays on screen.
pub fn scroll_offset(cursor: usize, rows_that_fit: usize) -> usize {
    if rows_that_fit == 0 {
        return cursor;
    }
    cursor.saturating_sub(rows_that_fit - 1)
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    if area.height < 4 {
        return;
    }
    let mut y = area.y;

    // Category chips
    let items: Vec<TabItem> = CATEGORY_CHIPS
        .iter()
        .map(|c| TabItem::new(c, chip_label(c)))
        .collect();
    let selected = CATEGORY_CHIPS
        .iter()
        .position(|c| *c == app.inbox.criteria().category().as_str())
        .unwrap_or(0);
    let row = render_tab_selector(&items, selected, ctx);
    let chips_x = area.x + 1;
    for (chip, (offset, width)) in CATEGORY_CHIPS.iter().zip(row.cells.iter()) {
        let rect = Rect::new(chips_x + offset, y, *width, 1).intersection(area);
        app.hit_areas
            .register(rect, ClickAction::FilterCategory(chip.to_string()), None);
    }
    frame.render_widget(
        Paragraph::new(row.line),
        Rect::new(chips_x, y, area.width.saturating_sub(1), 1),
    );
    y += 2;

    // Search box
    let searching = app.input_mode == InputMode::Search;
    let query = app.inbox.query_input();
    let search_text = if query.is_empty() && !searching {
        Span::styled("Search emails... (/)", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled(query.to_string(), Style::default().fg(COLOR_HEADER))
    };
    let mut search = vec![
        Span::styled(" ⌕ ", Style::default().fg(if searching { COLOR_ACCENT } else { COLOR_DIM })),
        search_text,
    ];
    if searching {
        search.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
    }
    let search_rect = Rect::new(area.x, y, area.width, 1);
    app.hit_areas
        .register(search_rect, ClickAction::FocusSearch, None);
    frame.render_widget(Paragraph::new(Line::from(search)), search_rect);
    y += 2;

    // Select-all
    if let Some(selection) = app.selection.as_ref() {
        let aggregate = selection.aggregate();
        let glyph_style = match aggregate {
            TriState::Unchecked => Style::default().fg(COLOR_DIM),
            _ => Style::default().fg(COLOR_ACCENT),
        };
        let summary = format!(
            " Select all ({}/{} selected)",
            selection.checked_count(),
            selection.len()
        );
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(aggregate.glyph(), glyph_style),
            Span::styled(summary, Style::default().fg(COLOR_TEXT)),
        ]);
        let rect = text_rect(area.x, y, &format!(" {}", aggregate.glyph()), area);
        app.hit_areas
            .register(rect, ClickAction::ToggleSelectAll, None);
        frame.render_widget(Paragraph::new(line), Rect::new(area.x, y, area.width, 1));
        y += 1;
    }

    let list_area = Rect::new(area.x, y, area.width, (area.y + area.height).saturating_sub(y));
    render_email_list(frame, list_area, app, ctx);
}

fn render_email_list(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    if area.height == 0 {
        return;
    }
    if app.inbox.visible_count() == 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " No emails match the current filter",
                Style::default().fg(COLOR_DIM),
            )),
            area,
        );
        return;
    }

    let show_preview = ctx.should_show_previews();
    let row_height: u16 = if show_preview { 2 } else { 1 };
    let rows_fit = (area.height / row_height) as usize;
    let offset = scroll_offset(app.inbox_cursor, rows_fit);

    let mut lines = Vec::new();
    let mut targets = Vec::new();
    for (idx, email) in app.inbox.visible_items().enumerate().skip(offset).take(rows_fit) {
        let checked = app
            .selection
            .as_ref()
            .map(|s| s.is_checked(&email.id))
            .unwrap_or(false);
        let glyph = if checked {
            TriState::Checked.glyph()
        } else {
            TriState::Unchecked.glyph()
        };
        let tag = email.primary_category().to_string();
        let is_cursor = idx == app.inbox_cursor;
        let row_style = cursor_style(is_cursor);

        // glyph (3) + sender + tag, the subject gets the rest
        let sender = truncate_string(&email.sender, 28);
        let fixed = 1 + 3 + 1 + sender.width() + 2 + tag.width() + 3;
        let subject = truncate_string(&email.subject, (area.width as usize).saturating_sub(fixed));

        lines.push(
            Line::from(vec![
                Span::raw(" "),
                Span::styled(glyph, Style::default().fg(if checked { COLOR_ACCENT } else { COLOR_DIM })),
                Span::raw(" "),
                Span::styled(
                    sender,
                    Style::default()
                        .fg(COLOR_HEADER)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(subject, Style::default().fg(COLOR_TEXT)),
                Span::raw("  "),
                Span::styled(format!("#{}", tag), Style::default().fg(category_color(&tag))),
            ])
            .style(row_style),
        );
        if show_preview {
            let preview = truncate_string(&email.preview, (area.width as usize).saturating_sub(6));
            lines.push(
                Line::from(Span::styled(format!("     {}", preview), Style::default().fg(COLOR_DIM)))
                    .style(row_style),
            );
        }
        targets.push((idx, email.id.clone()));
    }

    for (row, (idx, id)) in targets.into_iter().enumerate() {
        let y = area.y + row as u16 * row_height;
        let checkbox = Rect::new(area.x + 1, y, 3, 1).intersection(area);
        app.hit_areas
            .register(Rect::new(area.x, y, area.width, row_height).intersection(area), ClickAction::ViewEmail(idx), None);
        app.hit_areas
            .register(checkbox, ClickAction::ToggleEmail(id), None);
    }

    frame.render_widget(Paragraph::new(lines), area);
}
