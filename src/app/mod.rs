//! Application state and event handling

pub mod command;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::quiz::{Mode, Phase, Prompt, QuizController};
use crate::theme::Theme;
use crate::ui;
use command::{Command, ParseResult, parse_command};
use input::{Action, is_force_quit, is_text_input, key_to_action};
use state::{AppState, Screen};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Theme resolved from the configuration
    theme: Theme,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance around a quiz session
    pub fn new(config: Config, quiz: QuizController) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let theme = config.active_theme();

        Ok(Self { config, theme, state: AppState::new(quiz), terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.theme);
            })?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key).await {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                            }
                        }
                        self.state.sync_with_session();
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if should exit
    async fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if is_force_quit(key.code, key.modifiers) {
            return Ok(true);
        }

        if self.state.command_line.is_input_mode() {
            if !is_text_input(key.code, key.modifiers) {
                return Ok(false);
            }
            return Ok(self.handle_command_key(key.code));
        }

        if self.state.screen == Screen::Help {
            self.state.screen = Screen::Main;
            return Ok(false);
        }

        if self.is_typing() {
            self.handle_typing_key(key.code, key.modifiers);
            return Ok(false);
        }

        match key_to_action(key.code, self.config.vim_mode) {
            Some(action) => Ok(self.handle_action(action)),
            None => Ok(false),
        }
    }

    /// Whether a typed question is waiting for its answer
    fn is_typing(&self) -> bool {
        matches!(self.state.quiz.phase(), Phase::Asking { prompt: Prompt::Typed, .. })
    }

    /// Keys while entering a typed answer
    fn handle_typing_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if !is_text_input(key, modifiers) {
            return;
        }
        let answer = &mut self.state.question.answer;
        match key {
            KeyCode::Enter => {
                let text = answer.text.clone();
                self.state.quiz.submit_typed(&text);
            }
            KeyCode::Esc if !answer.is_empty() => answer.clear(),
            KeyCode::Esc => self.state.quiz.go_home(),
            KeyCode::Backspace => answer.delete_char(),
            KeyCode::Delete => answer.delete_char_forward(),
            KeyCode::Left => answer.move_left(),
            KeyCode::Right => answer.move_right(),
            KeyCode::Home => answer.move_start(),
            KeyCode::End => answer.move_end(),
            KeyCode::Up => {
                self.state.quiz.prev();
            }
            KeyCode::Char(c) => answer.insert_char(c),
            _ => {}
        }
    }

    /// Keys while the command line is open
    fn handle_command_key(&mut self, key: KeyCode) -> bool {
        let command_line = &mut self.state.command_line;
        match key {
            KeyCode::Esc => command_line.exit_input_mode(),
            KeyCode::Enter => {
                let input = command_line.input.text.clone();
                command_line.add_to_history(input.clone());
                command_line.exit_input_mode();
                return self.run_command(&input);
            }
            KeyCode::Backspace if command_line.input.is_empty() => command_line.exit_input_mode(),
            KeyCode::Backspace => command_line.input.delete_char(),
            KeyCode::Delete => command_line.input.delete_char_forward(),
            KeyCode::Left => command_line.input.move_left(),
            KeyCode::Right => command_line.input.move_right(),
            KeyCode::Home => command_line.input.move_start(),
            KeyCode::End => command_line.input.move_end(),
            KeyCode::Up => command_line.history_up(),
            KeyCode::Down => command_line.history_down(),
            KeyCode::Char(c) => command_line.input.insert_char(c),
            _ => {}
        }
        false
    }

    /// Parse and execute a command line entry, returns true if should exit
    fn run_command(&mut self, input: &str) -> bool {
        match parse_command(input) {
            ParseResult::Ok(command) => return self.execute_command(command),
            ParseResult::UnknownCommand(cmd) => {
                self.state.command_line.set_error(format!("Unknown command: {}", cmd));
            }
            ParseResult::MissingArgument(cmd) => {
                self.state.command_line.set_error(format!(":{} needs an argument", cmd));
            }
            ParseResult::InvalidArgument(msg) => self.state.command_line.set_error(msg),
        }
        false
    }

    /// Execute a parsed command, returns true if should exit
    fn execute_command(&mut self, command: Command) -> bool {
        let quiz = &mut self.state.quiz;
        match command {
            Command::Mode(mode) => quiz.set_mode(mode),
            Command::Direction(direction) => quiz.set_direction(direction),
            Command::Category(key) => {
                quiz.select_category(&key);
                if quiz.active().is_empty() {
                    self.state.command_line.set_error(format!("No entries in '{}'", key));
                }
            }
            Command::Categories => {
                let deck = quiz.deck();
                let listing = deck
                    .selectable_keys()
                    .into_iter()
                    .map(|key| format!("{} ({})", key, deck.count_in(key)))
                    .collect::<Vec<_>>()
                    .join("  ");
                self.state.command_line.set_message(listing);
            }
            Command::Retry => quiz.retry_all(),
            Command::RetryWrong => self.retry_wrong(),
            Command::Home => quiz.go_home(),
            Command::Help => self.state.screen = Screen::Help,
            Command::Quit => return true,
            Command::Nop => self.state.command_line.clear_message(),
        }
        false
    }

    /// Apply a mapped action, returns true if should exit
    fn handle_action(&mut self, action: Action) -> bool {
        let quiz = &mut self.state.quiz;
        match action {
            Action::Up => self.move_cursor(-1),
            Action::Down => self.move_cursor(1),
            Action::PrevQuestion => {
                quiz.prev();
            }
            Action::NextQuestion => {
                quiz.next();
            }
            Action::Select => self.select(),
            Action::Pick(index) => {
                quiz.choose(index);
            }
            Action::ToggleMode => {
                let mode = quiz.mode().toggled();
                quiz.set_mode(mode);
            }
            Action::ToggleDirection => {
                let direction = quiz.direction().toggled();
                quiz.set_direction(direction);
            }
            Action::NextCategory => quiz.cycle_category(true),
            Action::PrevCategory => quiz.cycle_category(false),
            Action::RetryAll => {
                if quiz.phase() == &Phase::Finished {
                    quiz.retry_all();
                }
            }
            Action::RetryWrong => self.retry_wrong(),
            Action::Home => quiz.go_home(),
            Action::Command => self.state.command_line.enter_command_mode(),
            Action::Help => self.state.screen = Screen::Help,
            Action::Quit => return true,
        }
        false
    }

    /// Move the list selection or the highlighted option
    fn move_cursor(&mut self, delta: isize) {
        match self.state.quiz.phase() {
            Phase::Asking { prompt: Prompt::Choice(options), .. } => {
                let len = options.options.len();
                if len > 0 {
                    let cursor = &mut self.state.question.choice_cursor;
                    *cursor = cursor.saturating_add_signed(delta).min(len - 1);
                }
            }
            Phase::Listing => {
                let len = self.state.quiz.active().len();
                self.state.list.move_by(delta, len);
            }
            _ => {}
        }
    }

    /// Enter/Space: advance, confirm the highlighted option, or reveal a card
    fn select(&mut self) {
        let quiz = &mut self.state.quiz;
        if quiz.can_advance() {
            quiz.next();
            return;
        }
        if matches!(quiz.phase(), Phase::Asking { prompt: Prompt::Choice(_), .. }) {
            quiz.choose(self.state.question.choice_cursor);
            return;
        }
        if quiz.mode() == Mode::List {
            if let Some(entry) = quiz.active().get(self.state.list.selected) {
                let id = entry.id.clone();
                self.state.list.toggle_reveal(&id);
            }
        }
    }

    fn retry_wrong(&mut self) {
        if !self.state.quiz.retry_wrong() {
            self.state.command_line.set_message("Nothing to retry");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
