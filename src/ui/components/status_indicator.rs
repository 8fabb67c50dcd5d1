//! Status Indicator Component
//!
//! Spinner shown on buttons whose action is in flight.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame (16ms ticks, so about 8 frames per second)
const TICKS_PER_FRAME: u64 = 8;

/// Spinner character for an animation tick.
pub fn get_spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// A spinner followed by a dimmed message, e.g. `◐ Scanning...`.
pub fn render_spinner(message: &str, tick: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", get_spinner_char(tick)),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(COLOR_DIM)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(TICKS_PER_FRAME), '◓');
        assert_eq!(get_spinner_char(TICKS_PER_FRAME * 4), '◐');
    }

    #[test]
    fn test_render_spinner_text() {
        let line = render_spinner("Scanning...", 0);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "◐ Scanning...");
    }
}
