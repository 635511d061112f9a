//! Quiz session controller
//!
//! Holds the mode/direction/category selection, the active question list and
//! the wrong-answer record, and moves through the session phases:
//!
//! ```text
//! Listing ⇄ Asking → Answered → Asking (next) … → Finished
//!                                                  ├─ retry → Asking
//!                                                  └─ home  → Listing
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::options::{QuizOptions, generate_quiz_options};
use super::score::{ScoreSummary, unique_entries};
use super::shuffle::shuffle;
use super::{Direction, Mode};
use crate::deck::{ALL_CATEGORIES, Deck, WordEntry};

/// How the current question is answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Pick the translation from a shuffled option set
    Choice(QuizOptions),
    /// Type the source word
    Typed,
}

/// What the user answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Given {
    Choice(usize),
    Typed(String),
}

/// Result of checking one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub correct: bool,
    pub given: Given,
}

/// Session phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Browsing cards (also the resting phase of an empty quiz)
    Listing,
    /// Waiting for an answer to question `index`
    Asking { index: usize, prompt: Prompt },
    /// Question `index` has been answered and is locked
    Answered { index: usize, prompt: Prompt, outcome: Outcome },
    /// Past the last question
    Finished,
}

impl Phase {
    /// Index of the question on screen, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Phase::Asking { index, .. } | Phase::Answered { index, .. } => Some(*index),
            Phase::Listing | Phase::Finished => None,
        }
    }
}

/// Case-insensitive, whitespace-trimmed comparison used for typed answers
pub fn matches_typed(input: &str, expected: &str) -> bool {
    input.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// The quiz session state machine
#[derive(Debug)]
pub struct QuizController {
    deck: Deck,
    /// Cleaned translations of the whole deck, used for distractors
    answer_pool: Vec<String>,
    rng: StdRng,
    mode: Mode,
    direction: Direction,
    /// Direction restored by `go_home`
    home_direction: Direction,
    category: String,
    active: Vec<WordEntry>,
    wrong: Vec<WordEntry>,
    phase: Phase,
    /// Bumped whenever a different question or screen is presented
    generation: u64,
}

impl QuizController {
    /// Create a controller seeded from the OS random source
    pub fn new(deck: Deck) -> Self {
        Self::with_rng(deck, StdRng::from_os_rng())
    }

    /// Create a controller with a fixed seed (reproducible order)
    pub fn with_seed(deck: Deck, seed: u64) -> Self {
        Self::with_rng(deck, StdRng::seed_from_u64(seed))
    }

    /// Create a controller with the given random source.
    ///
    /// Starts in list mode on the first declared category.
    pub fn with_rng(deck: Deck, rng: StdRng) -> Self {
        let category = deck.first_category_key().to_string();
        let answer_pool = deck.answer_pool();
        let mut controller = Self {
            deck,
            answer_pool,
            rng,
            mode: Mode::List,
            direction: Direction::default(),
            home_direction: Direction::default(),
            category,
            active: Vec::new(),
            wrong: Vec::new(),
            phase: Phase::Listing,
            generation: 0,
        };
        controller.reset_session(None);
        controller
    }

    /// Set both the current and the home direction
    pub fn with_default_direction(mut self, direction: Direction) -> Self {
        self.home_direction = direction;
        self.set_direction(direction);
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Questions (or cards) of the current session, in presentation order
    pub fn active(&self) -> &[WordEntry] {
        &self.active
    }

    /// Every wrong answer recorded this session, repeats included
    pub fn wrong(&self) -> &[WordEntry] {
        &self.wrong
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Counter that changes whenever the presented question or screen changes
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Entry behind the question on screen
    pub fn current_entry(&self) -> Option<&WordEntry> {
        self.phase.index().and_then(|i| self.active.get(i))
    }

    // --- Selection -------------------------------------------------------

    /// Switch between list and quiz mode
    pub fn set_mode(&mut self, mode: Mode) {
        tracing::debug!("Mode -> {}", mode);
        self.mode = mode;
        self.reset_session(None);
    }

    /// Switch the prompt direction
    pub fn set_direction(&mut self, direction: Direction) {
        tracing::debug!("Direction -> {}", direction);
        self.direction = direction;
        self.reset_session(None);
    }

    /// Select a category key; unknown keys give an empty session
    pub fn select_category(&mut self, category: &str) {
        tracing::debug!("Category -> {}", category);
        self.category = category.to_string();
        self.reset_session(None);
    }

    /// Move to the next (or previous) selectable category, wrapping around
    pub fn cycle_category(&mut self, forward: bool) {
        let keys = self.deck.selectable_keys();
        let current = keys.iter().position(|k| *k == self.category);
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % keys.len(),
            (Some(i), false) => (i + keys.len() - 1) % keys.len(),
            (None, _) => 0,
        };
        let key = keys[next].to_string();
        self.select_category(&key);
    }

    /// Back to the full list in the home direction
    pub fn go_home(&mut self) {
        tracing::debug!("Home");
        self.category = ALL_CATEGORIES.to_string();
        self.mode = Mode::List;
        self.direction = self.home_direction;
        self.reset_session(None);
    }

    // --- Session lifecycle -----------------------------------------------

    /// Rebuild the session from the current selection, or from `custom`.
    ///
    /// Clears the wrong-answer record. Quiz sessions and custom lists are
    /// shuffled.
    fn reset_session(&mut self, custom: Option<Vec<WordEntry>>) {
        let is_custom = custom.is_some();
        self.wrong.clear();
        self.active = custom.unwrap_or_else(|| self.deck.filter(&self.category));

        if self.mode == Mode::Quiz || is_custom {
            shuffle(&mut self.active, &mut self.rng);
        }

        if self.mode == Mode::Quiz && !self.active.is_empty() {
            self.begin_question(0);
        } else {
            self.phase = Phase::Listing;
            self.generation += 1;
        }
    }

    /// Present question `index` fresh
    fn begin_question(&mut self, index: usize) {
        let prompt = match self.direction {
            Direction::SourceToTarget => {
                let correct = self.active[index].clean_answer();
                Prompt::Choice(generate_quiz_options(&correct, &self.answer_pool, &mut self.rng))
            }
            Direction::TargetToSource => Prompt::Typed,
        };
        self.phase = Phase::Asking { index, prompt };
        self.generation += 1;
    }

    /// Reshuffle the current selection and start over
    pub fn retry_all(&mut self) {
        tracing::debug!("Retry all");
        self.reset_session(None);
    }

    /// Start a session over the distinct entries missed in the finished one.
    ///
    /// Returns false when nothing was missed or the session is not finished.
    pub fn retry_wrong(&mut self) -> bool {
        if self.phase != Phase::Finished || self.wrong.is_empty() {
            return false;
        }
        let missed = unique_entries(&self.wrong);
        tracing::debug!("Retry {} missed entries", missed.len());
        self.reset_session(Some(missed));
        true
    }

    // --- Answering -------------------------------------------------------

    /// Answer a choice question by option index.
    ///
    /// Returns `None` when the question is locked, is not a choice question,
    /// or the index is out of range.
    pub fn choose(&mut self, selected: usize) -> Option<bool> {
        let Phase::Asking { prompt: Prompt::Choice(options), .. } = &self.phase else {
            return None;
        };
        if selected >= options.options.len() {
            return None;
        }
        let correct = selected == options.correct_index;
        self.record(Outcome { correct, given: Given::Choice(selected) });
        Some(correct)
    }

    /// Answer a typed question.
    ///
    /// Blank input and locked questions are ignored (`None`).
    pub fn submit_typed(&mut self, input: &str) -> Option<bool> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let Phase::Asking { prompt: Prompt::Typed, .. } = &self.phase else {
            return None;
        };
        let expected = &self.current_entry()?.prompt;
        let correct = matches_typed(input, expected);
        self.record(Outcome { correct, given: Given::Typed(input.to_string()) });
        Some(correct)
    }

    /// Lock the current question with `outcome`
    fn record(&mut self, outcome: Outcome) {
        let phase = std::mem::replace(&mut self.phase, Phase::Listing);
        let Phase::Asking { index, prompt } = phase else {
            self.phase = phase;
            return;
        };
        if !outcome.correct {
            if let Some(entry) = self.active.get(index) {
                self.wrong.push(entry.clone());
            }
        }
        tracing::debug!("Question {} answered, correct = {}", index + 1, outcome.correct);
        self.phase = Phase::Answered { index, prompt, outcome };
    }

    // --- Sequencing ------------------------------------------------------

    /// Whether `next` would do anything
    pub fn can_advance(&self) -> bool {
        matches!(self.phase, Phase::Answered { .. })
    }

    /// Whether `prev` would do anything
    pub fn can_go_back(&self) -> bool {
        self.phase.index().is_some_and(|i| i > 0)
    }

    /// Advance past an answered question; past the last one the session finishes
    pub fn next(&mut self) -> bool {
        let Phase::Answered { index, .. } = self.phase else {
            return false;
        };
        if index + 1 < self.active.len() {
            self.begin_question(index + 1);
        } else {
            self.phase = Phase::Finished;
            self.generation += 1;
            if let Some(summary) = self.summary() {
                tracing::info!(
                    "Session finished: {}/{} correct in '{}'",
                    summary.correct,
                    summary.total,
                    self.category
                );
            }
        }
        true
    }

    /// Go back one question; no-op on the first question
    pub fn prev(&mut self) -> bool {
        match self.phase.index() {
            Some(index) if index > 0 => {
                self.begin_question(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Score of the finished session
    pub fn summary(&self) -> Option<ScoreSummary> {
        match self.phase {
            Phase::Finished => Some(ScoreSummary::compute(self.active.len(), &self.wrong)),
            _ => None,
        }
    }
}
