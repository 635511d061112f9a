//! Text cleaning for translations and example sentences
//!
//! Translations may carry inline annotations wrapped in `^^` pairs
//! (e.g. a part-of-speech tag like `りんご^^名^^`). They are stripped
//! before a translation is displayed or compared.

use once_cell::sync::Lazy;
use regex::Regex;

/// Paired `^^…^^` annotation markers (non-greedy)
static ANNOTATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^\^.*?\^\^").unwrap());

/// Parenthesised gloss in an example sentence
static GLOSS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.+\)").unwrap());

/// Strip annotation markers and surrounding whitespace
pub fn clean_text(text: &str) -> String {
    ANNOTATION_RE.replace_all(text, "").trim().to_string()
}

/// Strip the parenthesised gloss from an example sentence
pub fn clean_example(text: &str) -> String {
    GLOSS_RE.replace_all(text, "").trim().to_string()
}
