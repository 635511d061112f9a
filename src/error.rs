//! Error types for deck loading

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a deck
#[derive(Debug, Error)]
pub enum DeckError {
    /// Deck file could not be read
    #[error("Failed to read deck from {path:?}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Deck contents are not valid JSON for the deck format
    #[error("Failed to parse deck: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share the same id
    #[error("Duplicate entry id '{0}'")]
    DuplicateId(String),

    /// Two categories share the same key
    #[error("Duplicate category key '{0}'")]
    DuplicateCategory(String),

    /// A category uses the reserved wildcard key
    #[error("Category key '{0}' is reserved")]
    ReservedCategory(String),
}

impl DeckError {
    /// Check if this error comes from the deck contents rather than the filesystem
    pub fn is_content_error(&self) -> bool {
        !matches!(self, DeckError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_is_not_content_error() {
        let err = DeckError::Io {
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(!err.is_content_error());
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn duplicate_id_message_names_the_id() {
        let err = DeckError::DuplicateId("F-001".into());
        assert!(err.is_content_error());
        assert_eq!(err.to_string(), "Duplicate entry id 'F-001'");
    }
}
