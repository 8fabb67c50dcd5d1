//! Tab Selector Component
//!
//! A horizontal row of chips. The selected chip gets a `▶` marker. The
//! returned [`TabRow`] also carries each chip's column span so callers can
//! register click targets.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    pub id: &'a str,
    pub label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(id: &'a str, label: &'a str) -> Self {
        Self { id, label }
    }
}

/// A rendered chip row.
#[derive(Debug, Clone)]
pub struct TabRow {
    pub line: Line<'static>,
    /// `(column offset, width)` of each chip, relative to the line start
    pub cells: Vec<(u16, u16)>,
}

pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize, ctx: &LayoutContext) -> TabRow {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut cells = Vec::with_capacity(items.len());
    let mut offset: u16 = 0;
    let spacing = if ctx.is_extra_small() { " " } else { "  " };

    for (idx, item) in items.iter().enumerate() {
        let (marker, marker_style, text_style) = if idx == selected {
            (
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(COLOR_DIM), Style::default().fg(COLOR_DIM))
        };

        let width = (marker.width() + item.label.width()) as u16;
        cells.push((offset, width));
        offset = offset.saturating_add(width);

        spans.push(Span::styled(marker, marker_style));
        spans.push(Span::styled(item.label.to_string(), text_style));

        if idx + 1 < items.len() {
            spans.push(Span::raw(spacing));
            offset = offset.saturating_add(spacing.width() as u16);
        }
    }

    TabRow {
        line: Line::from(spans),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<TabItem<'static>> {
        vec![
            TabItem::new("all", "All"),
            TabItem::new("phishing", "Phishing"),
            TabItem::new("safe", "Safe"),
        ]
    }

    #[test]
    fn test_selected_item_has_marker() {
        let ctx = LayoutContext::new(120, 40, 80);
        let row = render_tab_selector(&items(), 1, &ctx);
        let text: String = row.line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "  All  ▶ Phishing    Safe");
    }

    #[test]
    fn test_cells_line_up_with_labels() {
        let ctx = LayoutContext::new(120, 40, 80);
        let row = render_tab_selector(&items(), 0, &ctx);
        assert_eq!(row.cells, vec![(0, 5), (7, 10), (19, 6)]);
    }
}
