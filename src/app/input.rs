//! Event handling utilities

use crossterm::event::{KeyCode, KeyModifiers};

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    PrevQuestion,
    NextQuestion,

    // Answering
    Select,
    Pick(usize),

    // Selection
    ToggleMode,
    ToggleDirection,
    NextCategory,
    PrevCategory,

    // Results
    RetryAll,
    RetryWrong,
    Home,

    // Modes
    Command,
    Help,
    Quit,
}

/// Key mapping outside of text entry
pub fn key_to_action(key: KeyCode, vim_mode: bool) -> Option<Action> {
    if vim_mode {
        if let Some(action) = vim_key_to_action(key) {
            return Some(action);
        }
    }
    match key {
        KeyCode::Down => Some(Action::Down),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Left => Some(Action::PrevQuestion),
        KeyCode::Right => Some(Action::NextQuestion),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char(c @ '1'..='4') => Some(Action::Pick(c as usize - '1' as usize)),
        KeyCode::Char(c @ 'a'..='d') => Some(Action::Pick(c as usize - 'a' as usize)),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('t') => Some(Action::ToggleDirection),
        KeyCode::Char(']') | KeyCode::Tab => Some(Action::NextCategory),
        KeyCode::Char('[') | KeyCode::BackTab => Some(Action::PrevCategory),
        KeyCode::Char('r') => Some(Action::RetryAll),
        KeyCode::Char('w') => Some(Action::RetryWrong),
        KeyCode::Char('H') | KeyCode::Esc => Some(Action::Home),
        KeyCode::Char(':') => Some(Action::Command),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Vim-style navigation keys
fn vim_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Char('h') => Some(Action::PrevQuestion),
        KeyCode::Char('l') => Some(Action::NextQuestion),
        _ => None,
    }
}

/// Whether the key combination always quits, even while typing
pub fn is_force_quit(key: KeyCode, modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c')
}

/// Whether a key should reach a text buffer; Ctrl and Alt chords are dropped
pub fn is_text_input(key: KeyCode, modifiers: KeyModifiers) -> bool {
    match key {
        KeyCode::Char(_) => !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(key_to_action(KeyCode::Char('j'), true), Some(Action::Down));
    }

    #[test]
    fn vim_keys_disabled_without_vim_mode() {
        assert_eq!(key_to_action(KeyCode::Char('j'), false), None);
        assert_eq!(key_to_action(KeyCode::Down, false), Some(Action::Down));
    }

    #[test]
    fn digits_and_letters_pick_options() {
        assert_eq!(key_to_action(KeyCode::Char('1'), true), Some(Action::Pick(0)));
        assert_eq!(key_to_action(KeyCode::Char('4'), true), Some(Action::Pick(3)));
        assert_eq!(key_to_action(KeyCode::Char('c'), true), Some(Action::Pick(2)));
        assert_eq!(key_to_action(KeyCode::Char('5'), true), None);
    }

    #[test]
    fn enter_and_space_select() {
        assert_eq!(key_to_action(KeyCode::Enter, true), Some(Action::Select));
        assert_eq!(key_to_action(KeyCode::Char(' '), true), Some(Action::Select));
    }

    #[test]
    fn brackets_cycle_categories() {
        assert_eq!(key_to_action(KeyCode::Char(']'), true), Some(Action::NextCategory));
        assert_eq!(key_to_action(KeyCode::Char('['), true), Some(Action::PrevCategory));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(key_to_action(KeyCode::Char('x'), true), None);
    }

    #[test]
    fn chords_are_not_text_input() {
        assert!(is_text_input(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(is_text_input(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert!(!is_text_input(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert!(!is_text_input(KeyCode::Char('x'), KeyModifiers::ALT));
        assert!(is_text_input(KeyCode::Enter, KeyModifiers::CONTROL));
    }

    #[test]
    fn ctrl_c_force_quits() {
        assert!(is_force_quit(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!is_force_quit(KeyCode::Char('c'), KeyModifiers::NONE));
    }
}
