//! Header bar with the current selections

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::quiz::{Mode, QuizController};
use crate::theme::Theme;

const SEPARATOR: &str = " \u{2502} "; // │

/// Draw mode, direction and category tabs
pub fn draw(frame: &mut Frame, area: Rect, quiz: &QuizController, theme: &Theme) {
    let line =
        Line::from(header_spans(quiz, theme)).style(Style::default().bg(theme.bg_secondary));
    frame.render_widget(Paragraph::new(line), area);
}

fn header_spans(quiz: &QuizController, theme: &Theme) -> Vec<Span<'static>> {
    let active = Style::default()
        .fg(theme.bg_primary)
        .bg(theme.accent_primary)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(theme.fg_muted);
    let separator = Span::styled(SEPARATOR, Style::default().fg(theme.border));

    let mut spans = vec![Span::styled(
        " tango ",
        Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
    )];
    spans.push(separator.clone());

    for mode in [Mode::List, Mode::Quiz] {
        let style = if quiz.mode() == mode { active } else { inactive };
        spans.push(Span::styled(format!(" {} ", mode), style));
    }
    spans.push(separator.clone());

    spans.push(Span::styled(quiz.direction().label(), Style::default().fg(theme.fg_secondary)));
    spans.push(separator);

    let deck = quiz.deck();
    for key in deck.selectable_keys() {
        let style = if key == quiz.category() { active } else { inactive };
        spans.push(Span::styled(format!(" {} ", deck.category_name(key)), style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::model::fixtures::small_deck;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn header_lists_every_category() {
        let quiz = QuizController::with_seed(small_deck(), 3);
        let spans = header_spans(&quiz, &Theme::default());
        let text = text(&spans);
        assert!(text.contains(" Alpha "));
        assert!(text.contains(" Beta "));
        assert!(text.contains(" All "));
    }

    #[test]
    fn active_mode_is_highlighted() {
        let theme = Theme::default();
        let mut quiz = QuizController::with_seed(small_deck(), 3);
        quiz.set_mode(Mode::Quiz);
        let spans = header_spans(&quiz, &theme);
        let quiz_tab = spans.iter().find(|s| s.content == " quiz ").map(|s| s.style);
        assert_eq!(quiz_tab.and_then(|s| s.bg), Some(theme.accent_primary));
    }
}
