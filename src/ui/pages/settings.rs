//! Settings page: on/off toggles and the Gmail connection row.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::SettingToggle;
use crate::ui::components::render_spinner;
use crate::ui::helpers::{button, cursor_style, text_rect, truncate_string};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS, COLOR_TEXT};

/// `[ON ]` or `[OFF]`, fixed width so rows line up.
pub fn toggle_glyph(enabled: bool) -> &'static str {
    if enabled {
        "[ON ]"
    } else {
        "[OFF]"
    }
}

fn toggle_line(setting: &SettingToggle, width: usize) -> Line<'static> {
    let glyph_style = if setting.enabled {
        Style::default()
            .fg(COLOR_SUCCESS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let description = truncate_string(
        &setting.description,
        width.saturating_sub(setting.name.len() + 12),
    );
    Line::from(vec![
        Span::raw(" "),
        Span::styled(toggle_glyph(setting.enabled), glyph_style),
        Span::raw(" "),
        Span::styled(setting.name.clone(), Style::default().fg(COLOR_HEADER)),
        Span::styled(format!(" · {}", description), Style::default().fg(COLOR_DIM)),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, _ctx: &LayoutContext) {
    if area.height == 0 {
        return;
    }
    let width = area.width as usize;
    let mut y = area.y;

    for idx in 0..app.settings.len() {
        if y >= area.y + area.height {
            return;
        }
        let line = toggle_line(&app.settings[idx], width)
            .style(cursor_style(idx == app.settings_cursor));
        let rect = text_rect(area.x + 1, y, toggle_glyph(true), area);
        app.hit_areas.register(
            rect,
            ClickAction::ToggleSetting(idx),
            Some(Style::default().fg(COLOR_ACCENT)),
        );
        frame.render_widget(Paragraph::new(line), Rect::new(area.x, y, area.width, 1));
        y += 1;
    }

    y += 1;
    if y >= area.y + area.height {
        return;
    }

    let mut spans = vec![
        Span::styled(" Gmail: ", Style::default().fg(COLOR_TEXT)),
        Span::styled("● ", Style::default().fg(COLOR_SUCCESS)),
        Span::styled("Connected", Style::default().fg(COLOR_SUCCESS)),
        Span::raw("  "),
    ];
    let x = area.x + Line::from(spans.clone()).width() as u16;
    if app.reconnect_in_flight {
        spans.extend(render_spinner("Reconnecting...", app.tick_count).spans);
    } else {
        let (span, _) = button(&mut app.hit_areas, "Reconnect", x, y, area, ClickAction::Reconnect);
        spans.push(span);
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, y, area.width, 1),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_glyph_fixed_width() {
        assert_eq!(toggle_glyph(true).len(), toggle_glyph(false).len());
    }

    #[test]
    fn test_toggle_line_shows_name_and_state() {
        let setting = SettingToggle::new("Auto-block Threats", "Quarantine", true);
        let text: String = toggle_line(&setting, 80)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, " [ON ] Auto-block Threats · Quarantine");
    }
}
