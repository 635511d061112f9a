//! Key binding reference overlay

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::theme::Theme;

/// Key bindings grouped by section
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Session",
        &[
            ("m", "Toggle list / quiz"),
            ("t", "Toggle direction"),
            ("[ ]", "Previous / next category"),
            ("H Esc", "Home: all words, list mode"),
        ],
    ),
    (
        "Questions",
        &[
            ("1-4 a-d", "Pick an option"),
            ("\u{2191}\u{2193} j k", "Move highlight"),
            ("Enter Space", "Confirm / next"),
            ("\u{2190}\u{2192} h l", "Previous / next question"),
            ("r", "Retry all (reshuffled)"),
            ("w", "Retry missed words"),
        ],
    ),
    (
        "Other",
        &[(":", "Command line (:mode :dir :cat :cats :retry)"), ("?", "This help"), ("q", "Quit")],
    ),
];

/// Draw the help overlay
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .title_bottom(Line::from(" any key to close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let mut lines = Vec::new();
    for (section, keys) in BINDINGS {
        lines.push(Line::from(Span::styled(
            *section,
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", key), Style::default().fg(theme.accent_primary)),
                Span::styled(*description, Style::default().fg(theme.fg_primary)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
