//! Quiz session logic
//!
//! Everything here is independent of the terminal: the controller owns the
//! session state, and `QuizController::view` describes what should be shown.

pub mod controller;
pub mod options;
pub mod score;
pub mod shuffle;
pub mod view;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use controller::{Given, Outcome, Phase, Prompt, QuizController};
pub use options::{OPTION_COUNT, QuizOptions, generate_quiz_options};
pub use score::{ScoreSummary, ScoreTier};
pub use shuffle::shuffle;
pub use view::View;

/// Study mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Browse the category as a list of cards
    #[default]
    List,
    /// Answer the category one question at a time
    Quiz,
}

impl Mode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Mode::List => Mode::Quiz,
            Mode::Quiz => Mode::List,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::List => write!(f, "list"),
            Mode::Quiz => write!(f, "quiz"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" | "study" | "l" => Ok(Mode::List),
            "quiz" | "test" | "q" => Ok(Mode::Quiz),
            other => Err(format!("Unknown mode '{}' (expected list or quiz)", other)),
        }
    }
}

/// Which side of an entry is the prompt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Show the source word, pick its translation from choices
    #[default]
    SourceToTarget,
    /// Show the translation, type the source word
    TargetToSource,
}

impl Direction {
    /// The other direction
    pub fn toggled(self) -> Self {
        match self {
            Direction::SourceToTarget => Direction::TargetToSource,
            Direction::TargetToSource => Direction::SourceToTarget,
        }
    }

    /// Short label for the header
    pub fn label(self) -> &'static str {
        match self {
            Direction::SourceToTarget => "Word → Translation",
            Direction::TargetToSource => "Translation → Word",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::SourceToTarget => write!(f, "forward"),
            Direction::TargetToSource => write!(f, "reverse"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forward" | "fwd" | "source-to-target" | "f" => Ok(Direction::SourceToTarget),
            "reverse" | "rev" | "target-to-source" | "r" => Ok(Direction::TargetToSource),
            other => Err(format!("Unknown direction '{}' (expected forward or reverse)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_aliases() {
        assert_eq!("quiz".parse::<Mode>(), Ok(Mode::Quiz));
        assert_eq!(" List ".parse::<Mode>(), Ok(Mode::List));
        assert!("exam".parse::<Mode>().is_err());
    }

    #[test]
    fn direction_round_trips_through_display() {
        for dir in [Direction::SourceToTarget, Direction::TargetToSource] {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }

    #[test]
    fn toggles_flip() {
        assert_eq!(Mode::List.toggled(), Mode::Quiz);
        assert_eq!(Direction::TargetToSource.toggled(), Direction::SourceToTarget);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Direction::TargetToSource).unwrap();
        assert_eq!(json, "\"target-to-source\"");
    }
}
