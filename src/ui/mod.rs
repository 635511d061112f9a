//! UI rendering components

pub mod command_line;
pub mod header;
pub mod help;
pub mod layout;
pub mod list_panel;
pub mod quiz_panel;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use crate::app::state::{AppState, Screen};
use crate::quiz::View;
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let [header_area, body_area, command_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
            .areas(area);

    header::draw(frame, header_area, &state.quiz, theme);

    match state.quiz.view() {
        View::Empty { category } => {
            let message = format!("No words in {}", category);
            layout::draw_placeholder(frame, body_area, &message, theme);
        }
        View::List(list) => list_panel::draw(frame, body_area, &list, &mut state.list, theme),
        View::Question(question) => {
            quiz_panel::draw_question(frame, body_area, &question, &state.question, theme)
        }
        View::Result(result) => quiz_panel::draw_results(frame, body_area, &result, theme),
    }

    command_line::draw(frame, command_area, &state.command_line, theme);

    if state.screen == Screen::Help {
        help::draw(frame, area, theme);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::deck::model::fixtures::small_deck;
    use crate::quiz::{Mode, Phase, Prompt, QuizController};

    fn render(state: &mut AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, state, &Theme::default())).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn list_mode_renders_cards() {
        let mut state = AppState::new(QuizController::with_seed(small_deck(), 1));
        let screen = render(&mut state);
        assert!(screen.contains("apple"));
        assert!(screen.contains("5 cards"));
    }

    #[test]
    fn quiz_mode_renders_question_header() {
        let mut quiz = QuizController::with_seed(small_deck(), 1);
        quiz.set_mode(Mode::Quiz);
        let mut state = AppState::new(quiz);
        let screen = render(&mut state);
        assert!(screen.contains("Question 1 of 5"));
    }

    #[test]
    fn empty_category_renders_placeholder() {
        let mut quiz = QuizController::with_seed(small_deck(), 1);
        quiz.select_category("missing");
        let mut state = AppState::new(quiz);
        let screen = render(&mut state);
        assert!(screen.contains("No words in missing"));
    }

    #[test]
    fn finished_session_renders_results() {
        let mut quiz = QuizController::with_seed(small_deck(), 1);
        quiz.set_mode(Mode::Quiz);
        while quiz.summary().is_none() {
            let correct = quiz.current_entry().map(|e| e.clean_answer());
            if let Phase::Asking { prompt: Prompt::Choice(opts), .. } = quiz.phase().clone() {
                let pick = correct
                    .and_then(|c| opts.options.iter().position(|o| *o == c))
                    .unwrap_or(0);
                quiz.choose(pick);
            }
            quiz.next();
        }
        let mut state = AppState::new(quiz);
        let screen = render(&mut state);
        assert!(screen.contains("5 / 5 correct"));
        assert!(screen.contains("[r] Retry all"));
    }

    #[test]
    fn tiny_deck_notes_missing_options() {
        use crate::deck::model::fixtures::entry;
        use crate::deck::{Category, Deck};

        let deck = Deck::new(
            vec![Category { key: "A".into(), name: "Alpha".into() }],
            vec![entry("a1", "A", "apple", "りんご"), entry("a2", "A", "bread", "パン")],
        );
        let mut quiz = QuizController::with_seed(deck, 1);
        quiz.set_mode(Mode::Quiz);
        let mut state = AppState::new(quiz);
        let screen = render(&mut state);
        assert!(screen.contains("Fewer options available"));
    }

    #[test]
    fn help_overlay_draws_on_top() {
        let mut state = AppState::new(QuizController::with_seed(small_deck(), 1));
        state.screen = Screen::Help;
        let screen = render(&mut state);
        assert!(screen.contains("Help"));
        assert!(screen.contains("Toggle direction"));
    }
}
