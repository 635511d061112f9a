//! Command line UI component

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout::line_with_cursor;
use crate::app::state::{CommandLineState, CommandMode};
use crate::theme::Theme;

/// Hint shown when the command line is idle
const IDLE_HINT: &str = "Press : for commands, ? for help";

/// Draw the command line at the bottom of the screen
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, theme: &Theme) {
    let line = match state.mode {
        CommandMode::Normal => {
            let (text, style) = match &state.message {
                Some(msg) if state.is_error => (msg.clone(), Style::default().fg(theme.error)),
                Some(msg) => (msg.clone(), Style::default().fg(theme.fg_secondary)),
                None => (IDLE_HINT.to_string(), Style::default().fg(theme.fg_muted)),
            };
            Line::from(Span::styled(text, style))
        }
        CommandMode::Command => {
            let text = format!(":{}", state.input.text);
            let style = Style::default().fg(theme.accent_primary);
            line_with_cursor(&text, state.input.cursor + 1, style, theme) // +1 for prefix
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}
