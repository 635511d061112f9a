//! Question and result panels

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::{centered_rect, line_with_cursor};
use crate::app::state::QuestionInput;
use crate::quiz::Direction;
use crate::quiz::view::{AnswerView, ChoiceMark, ChoiceView, Feedback, QuestionView, ResultView};
use crate::theme::Theme;

/// Shown under a choice list when the deck cannot fill every option
const FEW_OPTIONS_NOTE: &str = "  Fewer options available: the deck has too few distinct answers";

/// Height of the feedback panel including borders
const FEEDBACK_HEIGHT: u16 = 6;

/// Colors for the prompt side and the answer side of a question
fn side_colors(direction: Direction, theme: &Theme) -> (Color, Color) {
    match direction {
        Direction::SourceToTarget => (theme.source_text(), theme.target_text()),
        Direction::TargetToSource => (theme.target_text(), theme.source_text()),
    }
}

/// Draw the current question
pub fn draw_question(
    frame: &mut Frame,
    area: Rect,
    view: &QuestionView,
    input: &QuestionInput,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!(" Question {} of {} ", view.number, view.total))
        .title_bottom(Line::from(format!(" {} ", view.category)).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let feedback_height = if view.feedback.is_some() { FEEDBACK_HEIGHT } else { 0 };
    let [body_area, feedback_area, hint_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(feedback_height),
        Constraint::Length(1),
    ])
    .areas(inner);

    let (prompt_color, answer_color) = side_colors(view.direction, theme);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            view.prompt.clone(),
            Style::default().fg(prompt_color).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(""),
    ];

    match &view.answer {
        AnswerView::Choices(choices) => {
            let locked = view.feedback.is_some();
            for (i, choice) in choices.iter().enumerate() {
                let highlighted = !locked && i == input.choice_cursor;
                lines.push(choice_line(choice, highlighted, answer_color, theme));
                lines.push(Line::from(""));
            }
            if view.few_options {
                lines.push(Line::from(Span::styled(
                    FEW_OPTIONS_NOTE,
                    Style::default().fg(theme.warning),
                )));
            }
        }
        AnswerView::Typed { submitted } => {
            lines.push(Line::from(Span::styled(
                "  Type the word:",
                Style::default().fg(theme.fg_muted),
            )));
            let entry_line = match submitted {
                Some(text) => {
                    let correct = view.feedback.as_ref().is_some_and(|f| f.correct);
                    let color = if correct { theme.success } else { theme.error };
                    Line::from(vec![
                        Span::raw("  > "),
                        Span::styled(text.clone(), Style::default().fg(color)),
                    ])
                }
                None => {
                    let mut line = line_with_cursor(
                        &input.answer.text,
                        input.answer.cursor,
                        Style::default().fg(answer_color),
                        theme,
                    );
                    line.spans.insert(0, Span::raw("  > "));
                    line
                }
            };
            lines.push(entry_line);
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);

    if let Some(feedback) = &view.feedback {
        draw_feedback(frame, feedback_area, feedback, theme);
    }

    frame.render_widget(
        Paragraph::new(Line::from(nav_hint(view))).style(Style::default().fg(theme.fg_muted)),
        hint_area,
    );
}

/// One option row, e.g. `  ● A) りんご  ✓`
fn choice_line(
    choice: &ChoiceView,
    highlighted: bool,
    answer_color: Color,
    theme: &Theme,
) -> Line<'static> {
    let prefix = if highlighted { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○
    let (style, marker) = match choice.mark {
        Some(ChoiceMark::Correct) => {
            (Style::default().fg(theme.success).add_modifier(Modifier::BOLD), " \u{2713}")
        }
        Some(ChoiceMark::Wrong) => {
            (Style::default().fg(theme.error).add_modifier(Modifier::CROSSED_OUT), " \u{2717}")
        }
        None if highlighted => {
            (Style::default().fg(answer_color).add_modifier(Modifier::BOLD), "")
        }
        None => (Style::default().fg(theme.fg_secondary), ""),
    };

    Line::from(vec![
        Span::styled(format!("  {} {}) ", prefix, choice.label), style),
        Span::styled(choice.text.clone(), style),
        Span::styled(marker, style),
    ])
}

/// Accept/reject panel with the full entry
fn draw_feedback(frame: &mut Frame, area: Rect, feedback: &Feedback, theme: &Theme) {
    let (title, accent, bg) = if feedback.correct {
        (" \u{2713} Correct ", theme.success, theme.success_bg)
    } else {
        (" \u{2717} Not quite ", theme.error, theme.error_bg)
    };

    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(accent).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(bg));

    let mut lines = vec![Line::from(vec![
        Span::styled(feedback.word.clone(), Style::default().fg(theme.source_text())),
        Span::styled("  /  ", Style::default().fg(theme.fg_muted)),
        Span::styled(feedback.translation.clone(), Style::default().fg(theme.target_text())),
    ])];
    if !feedback.example.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Example: ", Style::default().fg(theme.fg_muted)),
            Span::styled(feedback.example.clone(), Style::default().fg(theme.fg_primary)),
        ]));
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

/// Key hints for the question footer
fn nav_hint(view: &QuestionView) -> String {
    let mut parts = Vec::new();
    if view.can_prev {
        parts.push("[\u{2190}/h] Prev");
    }
    if view.can_next {
        parts.push(if view.number == view.total { "[Enter] Results" } else { "[Enter] Next" });
    } else {
        match view.answer {
            AnswerView::Choices(_) => parts.push("[1-4/a-d] Pick    [j/k] Move    [Enter] Confirm"),
            AnswerView::Typed { .. } => parts.push("[Enter] Submit    [Esc] Clear"),
        }
    }
    parts.push("[H] Home");
    parts.join("    ")
}

/// Draw the end-of-session summary
pub fn draw_results(frame: &mut Frame, area: Rect, view: &ResultView, theme: &Theme) {
    let overlay_area = centered_rect(60, 60, area);

    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let summary = &view.summary;
    let score_color = if summary.wrong_count() == 0 { theme.success } else { theme.warning };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {} correct", summary.correct, summary.total),
            Style::default().fg(score_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(view.message, Style::default().fg(theme.fg_secondary))),
        Line::from(""),
        Line::from(""),
    ];

    let mut actions = vec!["[r] Retry all".to_string()];
    if let Some(count) = view.retry_wrong {
        actions.push(format!("[w] Retry missed ({})", count));
    }
    actions.push("[H] Home".to_string());
    lines.push(Line::from(Span::styled(
        actions.join("    "),
        Style::default().fg(theme.fg_muted),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::view::CHOICE_LABELS;

    fn question(answer: AnswerView, can_prev: bool, can_next: bool) -> QuestionView {
        QuestionView {
            number: 2,
            total: 3,
            category: "Alpha".into(),
            direction: Direction::SourceToTarget,
            prompt: "apple".into(),
            answer,
            few_options: false,
            feedback: None,
            can_prev,
            can_next,
        }
    }

    #[test]
    fn hint_hides_prev_on_first_question() {
        let view = question(AnswerView::Typed { submitted: None }, false, false);
        let hint = nav_hint(&view);
        assert!(!hint.contains("Prev"));
        assert!(hint.contains("Submit"));
    }

    #[test]
    fn hint_offers_results_after_last_answer() {
        let mut view = question(AnswerView::Choices(Vec::new()), true, true);
        view.number = 3;
        let hint = nav_hint(&view);
        assert!(hint.contains("Prev"));
        assert!(hint.contains("Results"));
    }

    #[test]
    fn marked_choice_shows_tick() {
        let theme = Theme::default();
        let choice = ChoiceView {
            label: CHOICE_LABELS[0],
            text: "りんご".into(),
            mark: Some(ChoiceMark::Correct),
        };
        let line = choice_line(&choice, false, theme.target_text(), &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "  \u{25CB} A) りんご \u{2713}");
    }

    #[test]
    fn reverse_direction_swaps_colors() {
        let theme = Theme::default();
        let (prompt, answer) = side_colors(Direction::TargetToSource, &theme);
        assert_eq!(prompt, theme.target_text());
        assert_eq!(answer, theme.source_text());
    }
}
