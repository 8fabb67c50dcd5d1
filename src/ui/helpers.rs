//! Helper functions for UI rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};
use unicode_width::UnicodeWidthStr;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_SELECTED_BG};

/// Truncate to at most `max_width` display columns, ending in "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Bracketed button label, e.g. `[ Scan Now ]`.
pub fn button_label(label: &str) -> String {
    format!("[ {} ]", label)
}

pub fn button_style() -> Style {
    Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Rect covering `text` drawn at (x, y), clipped to `bounds`.
pub fn text_rect(x: u16, y: u16, text: &str, bounds: Rect) -> Rect {
    let right = bounds.x.saturating_add(bounds.width);
    let width = (text.width() as u16).min(right.saturating_sub(x));
    Rect::new(x, y, width, 1)
}

/// Build a button span and register its click target.
///
/// Returns the span and the column just past the button.
pub fn button(
    hit_areas: &mut HitAreaRegistry,
    label: &str,
    x: u16,
    y: u16,
    bounds: Rect,
    action: ClickAction,
) -> (Span<'static>, u16) {
    let text = button_label(label);
    let rect = text_rect(x, y, &text, bounds);
    hit_areas.register(rect, action, Some(Style::default().bg(COLOR_SELECTED_BG)));
    let end = x.saturating_add(text.width() as u16);
    (Span::styled(text, button_style()), end)
}

/// Row style for the list cursor.
pub fn cursor_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(COLOR_SELECTED_BG)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer subject line", 10), "a longe...");
        assert_eq!(truncate_string("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn test_text_rect_clipped() {
        let bounds = Rect::new(0, 0, 20, 5);
        assert_eq!(text_rect(15, 1, "[ Export ]", bounds), Rect::new(15, 1, 5, 1));
    }

    #[test]
    fn test_button_registers_area() {
        let mut hits = HitAreaRegistry::new();
        let bounds = Rect::new(0, 0, 80, 5);
        let (span, end) = button(&mut hits, "Scan Now", 2, 1, bounds, ClickAction::ScanNow);
        assert_eq!(span.content, "[ Scan Now ]");
        assert_eq!(end, 14);
        assert_eq!(hits.hit_test(5, 1), Some(ClickAction::ScanNow));
        assert_eq!(hits.hit_test(14, 1), None);
    }
}
