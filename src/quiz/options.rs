//! Multiple-choice option generation

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::shuffle::shuffle;

/// Options shown for a choice question
pub const OPTION_COUNT: usize = 4;

/// A shuffled option set and the position of the correct answer in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOptions {
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuizOptions {
    /// Whether the set is smaller than a full option set
    pub fn is_degraded(&self) -> bool {
        self.options.len() < OPTION_COUNT
    }
}

/// Build an option set around `correct` using distractors drawn from `pool`.
///
/// Pool entries equal to `correct` are excluded and every pool entry is drawn
/// at most once, so the loop always terminates. With fewer than
/// `OPTION_COUNT - 1` distinct distractors the set comes back short.
pub fn generate_quiz_options<R: Rng + ?Sized>(
    correct: &str,
    pool: &[String],
    rng: &mut R,
) -> QuizOptions {
    let mut options = vec![correct.to_string()];
    let mut remaining: Vec<&str> =
        pool.iter().map(String::as_str).filter(|candidate| *candidate != correct).collect();

    while options.len() < OPTION_COUNT && !remaining.is_empty() {
        let candidate = remaining.swap_remove(rng.random_range(0..remaining.len()));
        if !options.iter().any(|o| o == candidate) {
            options.push(candidate.to_string());
        }
    }

    if options.len() < OPTION_COUNT {
        tracing::warn!(
            "Only {} distinct options available for '{}' (wanted {})",
            options.len(),
            correct,
            OPTION_COUNT
        );
    }

    shuffle(&mut options, rng);
    // `correct` was inserted first and never duplicated
    let correct_index = options.iter().position(|o| o == correct).unwrap_or_default();

    QuizOptions { options, correct_index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn four_distinct_options_with_correct_once() {
        let pool = pool(&["りんご", "パン", "米", "水", "お茶", "りんご"]);
        let set = generate_quiz_options("りんご", &pool, &mut StdRng::seed_from_u64(11));

        assert_eq!(set.options.len(), OPTION_COUNT);
        assert_eq!(set.options[set.correct_index], "りんご");
        assert_eq!(set.options.iter().filter(|o| *o == "りんご").count(), 1);
        assert!(!set.is_degraded());
    }

    #[test]
    fn duplicate_distractors_are_skipped() {
        let pool = pool(&["a", "b", "b", "b", "c", "d"]);
        let set = generate_quiz_options("a", &pool, &mut StdRng::seed_from_u64(5));
        let mut sorted = set.options.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), OPTION_COUNT);
    }

    #[test]
    fn small_pool_terminates_with_short_set() {
        let pool = pool(&["a", "b", "b", "c"]);
        let set = generate_quiz_options("a", &pool, &mut StdRng::seed_from_u64(0));
        assert_eq!(set.options.len(), 3);
        assert!(set.is_degraded());
        assert_eq!(set.options[set.correct_index], "a");
    }

    #[test]
    fn empty_pool_yields_only_correct() {
        let set = generate_quiz_options("only", &[], &mut StdRng::seed_from_u64(0));
        assert_eq!(set, QuizOptions { options: vec!["only".into()], correct_index: 0 });
    }

    proptest! {
        #[test]
        fn correct_index_points_at_correct(
            distractors in proptest::collection::hash_set("[a-z]{1,6}", 3..12),
            seed in any::<u64>(),
        ) {
            let correct = "CORRECT".to_string();
            let mut pool: Vec<String> = distractors.into_iter().collect();
            pool.push(correct.clone());

            let set = generate_quiz_options(&correct, &pool, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(set.options.len(), OPTION_COUNT);
            prop_assert_eq!(&set.options[set.correct_index], &correct);
            let unique: std::collections::HashSet<_> = set.options.iter().collect();
            prop_assert_eq!(unique.len(), OPTION_COUNT);
        }
    }
}
