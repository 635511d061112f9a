//! Pure view description of the session
//!
//! `QuizController::view` turns controller state into a `View`; the terminal
//! front end only decides how a `View` looks.

use super::controller::{Given, Outcome, Phase, Prompt, QuizController};
use super::score::ScoreSummary;
use super::{Direction, Mode};
use crate::deck::{WordEntry, clean_example};

/// Labels for choice options
pub const CHOICE_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// What the screen body should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The selected category has no entries
    Empty { category: String },
    List(ListView),
    Question(QuestionView),
    Result(ResultView),
}

/// Study list of the selected category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub direction: Direction,
    pub cards: Vec<ListCard>,
}

/// One card in the study list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCard {
    /// 1-based position
    pub number: usize,
    pub id: String,
    /// Side shown up front
    pub front: String,
    /// Side revealed on demand
    pub back: String,
    pub example: String,
}

/// A question on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based question number
    pub number: usize,
    pub total: usize,
    /// Name of the category the current entry belongs to
    pub category: String,
    pub direction: Direction,
    pub prompt: String,
    pub answer: AnswerView,
    /// The deck had too few distinct answers for a full option set
    pub few_options: bool,
    /// Present once the question is answered
    pub feedback: Option<Feedback>,
    pub can_prev: bool,
    pub can_next: bool,
}

/// Answer area of a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerView {
    Choices(Vec<ChoiceView>),
    Typed {
        /// What was submitted, once locked
        submitted: Option<String>,
    },
}

/// A single option in a choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub label: char,
    pub text: String,
    pub mark: Option<ChoiceMark>,
}

/// Marking applied to an option after answering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    Correct,
    Wrong,
}

/// Accept/reject panel shown after answering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    /// Canonical source word
    pub word: String,
    /// Cleaned translation
    pub translation: String,
    /// Example sentence without its gloss
    pub example: String,
}

impl Feedback {
    fn for_entry(entry: &WordEntry, correct: bool) -> Self {
        Self {
            correct,
            word: entry.prompt.clone(),
            translation: entry.clean_answer(),
            example: clean_example(&entry.example),
        }
    }
}

/// End-of-session summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub summary: ScoreSummary,
    pub message: &'static str,
    /// Number of distinct missed entries, when retry-wrong is offered
    pub retry_wrong: Option<usize>,
}

/// Front and back of an entry for the given direction
fn sides(entry: &WordEntry, direction: Direction) -> (String, String) {
    match direction {
        Direction::SourceToTarget => (entry.prompt.clone(), entry.clean_answer()),
        Direction::TargetToSource => (entry.clean_answer(), entry.prompt.clone()),
    }
}

impl QuizController {
    /// Describe what should be displayed for the current state
    pub fn view(&self) -> View {
        let category = self.deck().category_name(self.category()).to_string();
        if self.active().is_empty() {
            return View::Empty { category };
        }

        match (self.mode(), self.phase()) {
            (Mode::List, _) | (Mode::Quiz, Phase::Listing) => View::List(self.list_view()),
            (Mode::Quiz, Phase::Asking { index, prompt }) => {
                View::Question(self.question_view(*index, prompt, None))
            }
            (Mode::Quiz, Phase::Answered { index, prompt, outcome }) => {
                View::Question(self.question_view(*index, prompt, Some(outcome)))
            }
            (Mode::Quiz, Phase::Finished) => match self.summary() {
                Some(summary) => {
                    let retry_wrong = summary.can_retry_wrong().then(|| summary.wrong_count());
                    let message = summary.tier.message();
                    View::Result(ResultView { summary, message, retry_wrong })
                }
                None => View::Empty { category },
            },
        }
    }

    fn list_view(&self) -> ListView {
        let direction = self.direction();
        let cards = self
            .active()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let (front, back) = sides(entry, direction);
                ListCard {
                    number: i + 1,
                    id: entry.id.clone(),
                    front,
                    back,
                    example: entry.example.clone(),
                }
            })
            .collect();
        ListView { direction, cards }
    }

    fn question_view(
        &self,
        index: usize,
        prompt: &Prompt,
        outcome: Option<&Outcome>,
    ) -> QuestionView {
        let entry = &self.active()[index];
        let (front, _) = sides(entry, self.direction());

        let answer = match prompt {
            Prompt::Choice(options) => {
                let chosen = match outcome.map(|o| &o.given) {
                    Some(Given::Choice(i)) => Some(*i),
                    _ => None,
                };
                let choices = options
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, text)| {
                        let mark = match chosen {
                            Some(_) if i == options.correct_index => Some(ChoiceMark::Correct),
                            Some(c) if c == i => Some(ChoiceMark::Wrong),
                            _ => None,
                        };
                        let label = CHOICE_LABELS[i % CHOICE_LABELS.len()];
                        ChoiceView { label, text: text.clone(), mark }
                    })
                    .collect();
                AnswerView::Choices(choices)
            }
            Prompt::Typed => {
                let submitted = match outcome.map(|o| &o.given) {
                    Some(Given::Typed(text)) => Some(text.clone()),
                    _ => None,
                };
                AnswerView::Typed { submitted }
            }
        };

        QuestionView {
            number: index + 1,
            total: self.active().len(),
            category: self.deck().category_name(&entry.category).to_string(),
            direction: self.direction(),
            prompt: front,
            answer,
            few_options: matches!(prompt, Prompt::Choice(options) if options.is_degraded()),
            feedback: outcome.map(|o| Feedback::for_entry(entry, o.correct)),
            can_prev: index > 0,
            can_next: outcome.is_some(),
        }
    }
}
