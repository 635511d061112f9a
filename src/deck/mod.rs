//! Vocabulary decks: model, loading and text cleaning

pub mod loader;
pub mod model;
pub mod text;

pub use loader::{DeckReport, builtin_deck, load_deck};
pub use model::{ALL_CATEGORIES, Category, Deck, WordEntry};
pub use text::{clean_example, clean_text};
