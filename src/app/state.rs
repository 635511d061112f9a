//! Application state definitions

use std::collections::HashSet;

use crate::quiz::QuizController;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Main,
    Help,
}

/// Single-line text input with a character-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    /// Input buffer
    pub text: String,
    /// Cursor position (character index)
    pub cursor: usize,
}

impl LineInput {
    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.text.len())
    }

    /// Get the number of characters in input
    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.text.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.text.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Replace the contents and put the cursor at the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.move_end();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Command line hidden or showing status
    #[default]
    Normal,
    /// Accepting : commands
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Current mode
    pub mode: CommandMode,
    /// Input buffer
    pub input: LineInput,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 100;

    /// Start command mode
    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.message = None;
        self.history_index = None;
    }

    /// Exit input mode
    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Check if we're in input mode
    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    /// Add to history
    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    /// Navigate history up
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_index {
            None => self.history_index = Some(self.history.len() - 1),
            Some(i) if i > 0 => self.history_index = Some(i - 1),
            _ => {}
        }
        if let Some(i) = self.history_index {
            self.input.set(self.history[i].clone());
        }
    }

    /// Navigate history down
    pub fn history_down(&mut self) {
        if let Some(i) = self.history_index {
            if i + 1 < self.history.len() {
                self.history_index = Some(i + 1);
                self.input.set(self.history[i + 1].clone());
            } else {
                self.history_index = None;
                self.input.clear();
            }
        }
    }
}

/// State for the study list
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected card index
    pub selected: usize,
    /// First visible card
    pub scroll_offset: usize,
    /// Visible height in cards (updated on render)
    pub visible_height: usize,
    /// Ids of cards whose back side is shown
    pub revealed: HashSet<String>,
}

impl ListState {
    /// Ensure the selected card is visible by adjusting scroll offset
    pub fn ensure_selection_visible(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
        if self.visible_height > 0 && self.selected >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.selected + 1 - self.visible_height;
        }
    }

    /// Move selection by `delta`, clamped to `len`
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
        self.ensure_selection_visible();
    }

    /// Show or hide the back of a card
    pub fn toggle_reveal(&mut self, id: &str) {
        if !self.revealed.remove(id) {
            self.revealed.insert(id.to_string());
        }
    }

    /// Back to the top with every card hidden
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
        self.revealed.clear();
    }
}

/// Per-question input state, discarded whenever a new question is shown
#[derive(Debug, Clone, Default)]
pub struct QuestionInput {
    /// Highlighted option in a choice question
    pub choice_cursor: usize,
    /// Typed answer buffer
    pub answer: LineInput,
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// The quiz session
    pub quiz: QuizController,

    /// Study list state
    pub list: ListState,

    /// Input for the question on screen
    pub question: QuestionInput,

    /// Command line state
    pub command_line: CommandLineState,

    /// Session generation the transient state belongs to
    seen_generation: u64,
}

impl AppState {
    /// Create state around a quiz session
    pub fn new(quiz: QuizController) -> Self {
        let seen_generation = quiz.generation();
        Self {
            screen: Screen::default(),
            quiz,
            list: ListState::default(),
            question: QuestionInput::default(),
            command_line: CommandLineState::default(),
            seen_generation,
        }
    }

    /// Drop per-view input if the session moved to a different question or
    /// screen since the last call.
    ///
    /// Returns true when state was discarded.
    pub fn sync_with_session(&mut self) -> bool {
        let generation = self.quiz.generation();
        if generation == self.seen_generation {
            return false;
        }
        self.seen_generation = generation;
        self.question = QuestionInput::default();
        self.list.reset();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::model::fixtures::small_deck;
    use crate::quiz::{Direction, Mode};

    #[test]
    fn line_input_handles_multibyte() {
        let mut input = LineInput::default();
        for c in "りんご".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_char();
        assert_eq!(input.text, "りご");
        assert_eq!(input.cursor, 1);
        input.delete_char_forward();
        assert_eq!(input.text, "り");
    }

    #[test]
    fn line_input_cursor_bounds() {
        let mut input = LineInput::default();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.set("abc");
        input.move_right();
        assert_eq!(input.cursor, 3);
        input.move_start();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn history_navigation() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("mode quiz".into());
        cl.add_to_history("mode quiz".into());
        cl.add_to_history("cat A".into());
        assert_eq!(cl.history.len(), 2);

        cl.history_up();
        assert_eq!(cl.input.text, "cat A");
        cl.history_up();
        assert_eq!(cl.input.text, "mode quiz");
        cl.history_down();
        assert_eq!(cl.input.text, "cat A");
        cl.history_down();
        assert!(cl.input.is_empty());
    }

    #[test]
    fn list_selection_stays_visible() {
        let mut list = ListState { visible_height: 3, ..Default::default() };
        list.move_by(5, 10);
        assert_eq!(list.selected, 5);
        assert_eq!(list.scroll_offset, 3);
        list.move_by(-10, 10);
        assert_eq!(list.selected, 0);
        assert_eq!(list.scroll_offset, 0);
        list.move_by(100, 10);
        assert_eq!(list.selected, 9);
    }

    #[test]
    fn toggle_reveal_flips() {
        let mut list = ListState::default();
        list.toggle_reveal("a1");
        assert!(list.revealed.contains("a1"));
        list.toggle_reveal("a1");
        assert!(list.revealed.is_empty());
    }

    #[test]
    fn new_question_discards_typed_answer() {
        let mut quiz = QuizController::with_seed(small_deck(), 1);
        quiz.set_direction(Direction::TargetToSource);
        quiz.set_mode(Mode::Quiz);
        let mut state = AppState::new(quiz);

        state.question.answer.set("draft");
        assert!(!state.sync_with_session());
        assert_eq!(state.question.answer.text, "draft");

        state.quiz.submit_typed("draft");
        state.quiz.next();
        assert!(state.sync_with_session());
        assert!(state.question.answer.is_empty());
    }
}
