//! Deck model
//!
//! A deck is an ordered list of categories plus an ordered list of word
//! entries. Entries are read-only once loaded.

use serde::{Deserialize, Serialize};

use super::text::clean_text;

/// Reserved category key that selects every entry
pub const ALL_CATEGORIES: &str = "all";

/// One word/translation/example record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Unique identifier within the deck
    pub id: String,
    /// Category key
    pub category: String,
    /// Source-language word
    pub prompt: String,
    /// Translation, possibly carrying `^^…^^` annotations
    pub answer: String,
    /// Usage sentence
    #[serde(default)]
    pub example: String,
}

impl WordEntry {
    /// Translation with annotations stripped
    pub fn clean_answer(&self) -> String {
        clean_text(&self.answer)
    }
}

/// A category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Key referenced by entries
    pub key: String,
    /// Human-readable name
    pub name: String,
}

/// A complete vocabulary deck
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    /// Categories in display order
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Entries in deck order
    #[serde(default)]
    pub entries: Vec<WordEntry>,
}

impl Deck {
    /// Create a deck from categories and entries
    pub fn new(categories: Vec<Category>, entries: Vec<WordEntry>) -> Self {
        Self { categories, entries }
    }

    /// Total entry count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the deck has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries belonging to a category, in deck order.
    ///
    /// `"all"` returns every entry; an unknown key returns nothing.
    pub fn filter(&self, category: &str) -> Vec<WordEntry> {
        if category == ALL_CATEGORIES {
            return self.entries.clone();
        }
        self.entries.iter().filter(|e| e.category == category).cloned().collect()
    }

    /// Number of entries in a category
    pub fn count_in(&self, category: &str) -> usize {
        if category == ALL_CATEGORIES {
            return self.entries.len();
        }
        self.entries.iter().filter(|e| e.category == category).count()
    }

    /// Display name for a category key
    pub fn category_name<'a>(&'a self, key: &'a str) -> &'a str {
        if key == ALL_CATEGORIES {
            return "All";
        }
        self.categories.iter().find(|c| c.key == key).map(|c| c.name.as_str()).unwrap_or(key)
    }

    /// Key of the first declared category, or `"all"` when there are none
    pub fn first_category_key(&self) -> &str {
        self.categories.first().map(|c| c.key.as_str()).unwrap_or(ALL_CATEGORIES)
    }

    /// Selectable keys in cycling order: declared categories, then `"all"`
    pub fn selectable_keys(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|c| c.key.as_str())
            .chain(std::iter::once(ALL_CATEGORIES))
            .collect()
    }

    /// Cleaned translations of every entry, in deck order (duplicates kept)
    pub fn answer_pool(&self) -> Vec<String> {
        self.entries.iter().map(WordEntry::clean_answer).collect()
    }

    /// Number of distinct cleaned translations
    pub fn distinct_answers(&self) -> usize {
        let mut pool = self.answer_pool();
        pool.sort();
        pool.dedup();
        pool.len()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn filter_by_category_keeps_order() {
        let deck = small_deck();
        let ids: Vec<_> = deck.filter("B").into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["b1", "b2", "b3"]);
    }

    #[test]
    fn filter_all_returns_everything() {
        let deck = small_deck();
        assert_eq!(deck.filter(ALL_CATEGORIES).len(), deck.len());
        assert_eq!(deck.count_in(ALL_CATEGORIES), 8);
    }

    #[test]
    fn unknown_category_is_empty() {
        let deck = small_deck();
        assert!(deck.filter("nope").is_empty());
        assert_eq!(deck.count_in("nope"), 0);
    }

    #[test]
    fn category_name_falls_back_to_key() {
        let deck = small_deck();
        assert_eq!(deck.category_name("A"), "Alpha");
        assert_eq!(deck.category_name("all"), "All");
        assert_eq!(deck.category_name("zzz"), "zzz");
    }

    #[test]
    fn selectable_keys_end_with_all() {
        let deck = small_deck();
        assert_eq!(deck.selectable_keys(), vec!["A", "B", "all"]);
        assert_eq!(deck.first_category_key(), "A");
        assert_eq!(Deck::default().first_category_key(), ALL_CATEGORIES);
    }

    #[test]
    fn answer_pool_is_cleaned() {
        let deck = small_deck();
        assert_eq!(deck.answer_pool()[0], "りんご");
        assert_eq!(deck.distinct_answers(), 8);
    }

    #[test]
    fn entry_deserializes_without_example() {
        let json = r#"{"id":"x","category":"A","prompt":"p","answer":"a"}"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert!(entry.example.is_empty());
    }
}
