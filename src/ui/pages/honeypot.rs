//! Honeypot page: engagement switch and the session list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::helpers::{button, cursor_style, text_rect, truncate_string};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS, COLOR_TEXT};

/// Switch glyph for the engagement toggle.
pub fn switch_glyph(active: bool) -> &'static str {
    if active {
        "━━●"
    } else {
        "●━━"
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, _ctx: &LayoutContext) {
    if area.height < 3 {
        return;
    }
    let y = area.y;

    let glyph = switch_glyph(app.honeypot_active);
    let switch_color = if app.honeypot_active { COLOR_SUCCESS } else { COLOR_DIM };
    let switch = Line::from(vec![
        Span::raw(" "),
        Span::styled(glyph, Style::default().fg(switch_color)),
        Span::styled(" Scammer engagement: ", Style::default().fg(COLOR_TEXT)),
        Span::styled(
            app.honeypot_label(),
            Style::default()
                .fg(switch_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let rect = text_rect(area.x + 1, y, glyph, area);
    app.hit_areas.register(
        rect,
        ClickAction::ToggleHoneypot,
        Some(Style::default().fg(COLOR_ACCENT)),
    );
    frame.render_widget(Paragraph::new(switch), Rect::new(area.x, y, area.width, 1));

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Active Sessions",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Rect::new(area.x, y + 2, area.width, 1),
    );

    let list = Rect::new(
        area.x,
        y + 3,
        area.width,
        area.height.saturating_sub(3),
    );
    render_sessions(frame, list, app);
}

fn render_sessions(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }
    if app.sessions.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(" No sessions", Style::default().fg(COLOR_DIM))),
            area,
        );
        return;
    }

    let width = area.width as usize;
    let offset = app
        .session_cursor
        .saturating_sub((area.height as usize).saturating_sub(1));

    for (row, idx) in (offset..app.sessions.len()).take(area.height as usize).enumerate() {
        let y = area.y + row as u16;
        let session = &app.sessions[idx];
        let dim = Style::default().fg(COLOR_DIM);
        let (dot, status) = if session.status_active {
            (Span::styled("●", Style::default().fg(COLOR_SUCCESS)), "Active")
        } else {
            (Span::styled("○", dim), "Ended")
        };
        let name_style = if session.faded {
            dim
        } else {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD)
        };

        let detail = format!("  {} messages · {}", session.messages_exchanged, status);
        // dot, name, detail, and room for two buttons
        let name = truncate_string(&session.name, width.saturating_sub(detail.len() + 22).max(4));
        let mut spans = vec![
            Span::raw(" "),
            dot,
            Span::raw(" "),
            Span::styled(name.clone(), name_style),
            Span::styled(detail.clone(), if session.faded { dim } else { Style::default().fg(COLOR_TEXT) }),
            Span::raw("  "),
        ];
        let faded = session.faded;

        let mut x = area.x + 3 + Line::from(vec![Span::raw(name), Span::raw(detail)]).width() as u16 + 2;
        let (view, end) = button(
            &mut app.hit_areas,
            "View",
            x,
            y,
            area,
            ClickAction::ViewConversation(idx),
        );
        spans.push(view);
        x = end;
        if !faded {
            spans.push(Span::raw(" "));
            let (end_span, _) = button(
                &mut app.hit_areas,
                "End",
                x + 1,
                y,
                area,
                ClickAction::EndSession(idx),
            );
            spans.push(end_span);
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans).style(cursor_style(idx == app.session_cursor))),
            Rect::new(area.x, y, area.width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_glyph_moves_knob() {
        assert_ne!(switch_glyph(true), switch_glyph(false));
        assert!(switch_glyph(true).ends_with('●'));
    }
}
