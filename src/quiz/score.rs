//! Session scoring

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::deck::WordEntry;

/// Message tier for a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    /// Every question answered correctly
    Perfect,
    /// At least 80% correct
    Close,
    /// Below 80%
    KeepPracticing,
}

impl ScoreTier {
    /// Tier for `correct` out of `total`
    pub fn for_score(correct: usize, total: usize) -> Self {
        if correct == total {
            ScoreTier::Perfect
        } else if correct * 5 >= total * 4 {
            ScoreTier::Close
        } else {
            ScoreTier::KeepPracticing
        }
    }

    /// Message shown on the result screen
    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Perfect => "Outstanding! Every answer correct.",
            ScoreTier::Close => "So close! Just a little more.",
            ScoreTier::KeepPracticing => "Review the words and try again.",
        }
    }
}

/// Final score of a quiz session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total: usize,
    pub correct: usize,
    /// Ids answered wrong at least once, in first-miss order
    pub wrong_ids: Vec<String>,
    pub tier: ScoreTier,
}

impl ScoreSummary {
    /// Score a session of `total` questions given every wrong answer recorded.
    ///
    /// An entry missed several times counts once.
    pub fn compute(total: usize, wrong: &[WordEntry]) -> Self {
        let wrong_ids = unique_ids(wrong);
        let correct = total.saturating_sub(wrong_ids.len());
        Self { total, correct, tier: ScoreTier::for_score(correct, total), wrong_ids }
    }

    /// Number of distinct entries missed
    pub fn wrong_count(&self) -> usize {
        self.wrong_ids.len()
    }

    /// Whether a retry limited to missed entries makes sense
    pub fn can_retry_wrong(&self) -> bool {
        !self.wrong_ids.is_empty()
    }
}

/// Distinct ids in first-seen order
fn unique_ids(entries: &[WordEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries.iter().filter(|e| seen.insert(e.id.as_str())).map(|e| e.id.clone()).collect()
}

/// Entries with distinct ids in first-seen order
pub fn unique_entries(entries: &[WordEntry]) -> Vec<WordEntry> {
    let mut seen = HashSet::new();
    entries.iter().filter(|e| seen.insert(e.id.as_str())).cloned().collect()
}
