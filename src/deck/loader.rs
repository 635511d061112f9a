//! Deck loading and validation

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::model::{ALL_CATEGORIES, Deck};
use crate::error::DeckError;

/// Sample deck compiled into the binary
const BUILTIN_DECK: &str = include_str!("../../data/sample_deck.json");

/// Options needed for a full multiple-choice question
pub const MIN_DISTINCT_ANSWERS: usize = 4;

/// Load and validate a deck from a JSON file
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| DeckError::Io { path: path.to_path_buf(), source })?;
    let deck = parse_deck(&contents)?;
    tracing::info!(
        "Loaded deck from {:?}: {} entries in {} categories",
        path,
        deck.len(),
        deck.categories.len()
    );
    Ok(deck)
}

/// The sample deck shipped with the binary
pub fn builtin_deck() -> Result<Deck, DeckError> {
    parse_deck(BUILTIN_DECK)
}

/// Parse and validate deck JSON
pub fn parse_deck(contents: &str) -> Result<Deck, DeckError> {
    let deck: Deck = serde_json::from_str(contents)?;
    validate(&deck)?;
    Ok(deck)
}

/// Check structural invariants of a deck.
///
/// Entries referencing an undeclared category are kept (they still appear
/// under `"all"`) and only logged.
pub fn validate(deck: &Deck) -> Result<(), DeckError> {
    let mut keys = HashSet::new();
    for category in &deck.categories {
        if category.key == ALL_CATEGORIES {
            return Err(DeckError::ReservedCategory(category.key.clone()));
        }
        if !keys.insert(category.key.as_str()) {
            return Err(DeckError::DuplicateCategory(category.key.clone()));
        }
    }

    let mut ids = HashSet::new();
    for entry in &deck.entries {
        if !ids.insert(entry.id.as_str()) {
            return Err(DeckError::DuplicateId(entry.id.clone()));
        }
        if !keys.contains(entry.category.as_str()) {
            tracing::warn!("Entry {} uses undeclared category '{}'", entry.id, entry.category);
        }
    }

    Ok(())
}

/// Summary produced by `tango check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckReport {
    pub entries: usize,
    pub categories: usize,
    pub distinct_answers: usize,
    /// Categories that have no entries
    pub empty_categories: Vec<String>,
}

impl DeckReport {
    /// Build a report for an already validated deck
    pub fn new(deck: &Deck) -> Self {
        let empty_categories = deck
            .categories
            .iter()
            .filter(|c| deck.count_in(&c.key) == 0)
            .map(|c| c.key.clone())
            .collect();
        Self {
            entries: deck.len(),
            categories: deck.categories.len(),
            distinct_answers: deck.distinct_answers(),
            empty_categories,
        }
    }

    /// Whether every choice question can show a full option set
    pub fn supports_full_choices(&self) -> bool {
        self.distinct_answers >= MIN_DISTINCT_ANSWERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_ENTRIES: &str = r#"{
        "categories": [{"key": "A", "name": "Alpha"}],
        "entries": [
            {"id": "1", "category": "A", "prompt": "apple", "answer": "りんご", "example": "x"},
            {"id": "2", "category": "A", "prompt": "pear", "answer": "梨", "example": "y"}
        ]
    }"#;

    #[test]
    fn builtin_deck_is_valid() {
        let deck = builtin_deck().unwrap();
        assert!(!deck.is_empty());
        assert!(DeckReport::new(&deck).supports_full_choices());
    }

    #[test]
    fn load_deck_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TWO_ENTRIES.as_bytes()).unwrap();

        let deck = load_deck(file.path()).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.categories[0].name, "Alpha");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_deck(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(parse_deck("{ nope"), Err(DeckError::Parse(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"categories": [], "entries": [
            {"id": "1", "category": "A", "prompt": "a", "answer": "b"},
            {"id": "1", "category": "A", "prompt": "c", "answer": "d"}
        ]}"#;
        assert!(matches!(parse_deck(json), Err(DeckError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn reserved_category_is_rejected() {
        let json = r#"{"categories": [{"key": "all", "name": "Everything"}], "entries": []}"#;
        assert!(matches!(parse_deck(json), Err(DeckError::ReservedCategory(_))));
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let json = r#"{"categories": [{"key": "A", "name": "x"}, {"key": "A", "name": "y"}]}"#;
        assert!(matches!(parse_deck(json), Err(DeckError::DuplicateCategory(_))));
    }

    #[test]
    fn undeclared_category_is_kept() {
        let json = r#"{"categories": [], "entries": [
            {"id": "1", "category": "Z", "prompt": "a", "answer": "b"}
        ]}"#;
        let deck = parse_deck(json).unwrap();
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn report_flags_small_decks() {
        let deck = parse_deck(TWO_ENTRIES).unwrap();
        let report = DeckReport::new(&deck);
        assert_eq!(report.distinct_answers, 2);
        assert!(!report.supports_full_choices());
        assert!(report.empty_categories.is_empty());
    }
}
