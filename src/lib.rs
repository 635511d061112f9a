//! Tango - a terminal vocabulary flashcard and quiz tool
//!
//! Decks of word entries are studied as a card list or drilled as a
//! shuffled quiz, with multiple-choice questions in one direction and
//! typed answers in the other.

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod quiz;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use deck::Deck;
pub use quiz::QuizController;
pub use theme::Theme;
