//! Guess ranking
//!
//! Each candidate gets two raw signals:
//! - **usefulness**: how well its letters sit where the remaining candidates
//!   put them, from [`LetterStatistics`]
//! - **commonness**: how early it appears in the corpus
//!
//! Both are turned into normalised ranks within the pool and blended with
//! weights that move from usefulness towards commonness as the game goes on.

use super::{ConstraintState, LetterStatistics};
use crate::core::{WORD_LENGTH, Word, WordCorpus};
use std::cmp::Ordering;

/// Structural usefulness of `word` against the current pool
///
/// Sum over positions of `uses(letter, position) / occurrences(letter)`, scaled
/// by `distinct_letters / 5` so repeated letters are not rewarded twice.
#[must_use]
pub fn usefulness(word: &Word, stats: &LetterStatistics) -> f64 {
    let positional: f64 = word
        .chars()
        .iter()
        .enumerate()
        .map(|(position, &letter)| {
            f64::from(stats.uses(letter, position)) / word.count_of(letter) as f64
        })
        .sum();

    positional * (word.distinct_letters() as f64 / WORD_LENGTH as f64)
}

/// Turn-adaptive blend of the two signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub usefulness: u32,
    pub commonness: u32,
}

impl Weights {
    /// Weights for choosing guess number `turn` (1 for the first guess)
    ///
    /// - usefulness = max(0, (5 − confirmed) + (5 − turn) − locked)
    /// - commonness = max(0, confirmed + locked + turn)
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::LetterSet;
    /// use wordle_guesser::guesser::{ConstraintState, Weights};
    ///
    /// let state = ConstraintState::new(LetterSet::ALL);
    /// let weights = Weights::for_turn(&state, 1);
    /// assert_eq!((weights.usefulness, weights.commonness), (9, 1));
    /// ```
    #[must_use]
    pub fn for_turn(state: &ConstraintState, turn: usize) -> Self {
        let confirmed = state.correct_letters().len() as i64;
        let locked = state.known_exact_positions() as i64;
        let turn = turn as i64;
        let length = WORD_LENGTH as i64;

        let usefulness = (length - confirmed) + (length - turn) - locked;
        let commonness = confirmed + locked + turn;

        Self {
            usefulness: usefulness.max(0) as u32,
            commonness: commonness.max(0) as u32,
        }
    }
}

/// One ranked candidate
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub usefulness: f64,
    pub commonness: f64,
    /// 0-based position when the pool is sorted by usefulness
    pub usefulness_rank: usize,
    /// 0-based position when the pool is sorted by commonness
    pub commonness_rank: usize,
    pub score: f64,
}

/// The pool sorted best guess first
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    entries: Vec<ScoredWord<'a>>,
    weights: Weights,
}

impl<'a> Ranking<'a> {
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ScoredWord<'a>] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub const fn weights(&self) -> Weights {
        self.weights
    }

    /// The suggested guess
    #[must_use]
    pub fn best(&self) -> Option<&ScoredWord<'a>> {
        self.entries.first()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ScoredWord<'a>> {
        self.entries.get(index)
    }

    /// Entry for a specific word, if it is in the pool
    #[must_use]
    pub fn find(&self, word: &Word) -> Option<&ScoredWord<'a>> {
        self.entries.iter().find(|entry| entry.word == word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.entries.iter().map(|entry| entry.word)
    }
}

/// Ranks a candidate pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringEngine {
    usefulness_rank_bonus: f64,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ScoringEngine {
    /// Create an engine
    ///
    /// `usefulness_rank_bonus` is added to the usefulness rank numerator:
    /// `(n − rank + bonus) / n`. The commonness rank gets no bonus.
    #[must_use]
    pub const fn new(usefulness_rank_bonus: f64) -> Self {
        Self {
            usefulness_rank_bonus,
        }
    }

    /// Rank `pool`, best guess first
    ///
    /// Raw usefulness and commonness are converted to ranks by stable
    /// descending sorts, normalised to `(n − rank) / n`, weighted and summed.
    /// Equal scores keep pool order.
    #[must_use]
    pub fn rank<'a>(
        &self,
        pool: &[&'a Word],
        stats: &LetterStatistics,
        corpus: &WordCorpus,
        weights: Weights,
    ) -> Ranking<'a> {
        let raw_usefulness: Vec<f64> = pool.iter().map(|word| usefulness(word, stats)).collect();
        let raw_commonness: Vec<f64> = pool.iter().map(|word| corpus.commonness(word)).collect();

        let usefulness_ranks = descending_ranks(&raw_usefulness);
        let commonness_ranks = descending_ranks(&raw_commonness);

        let n = pool.len() as f64;
        let mut entries: Vec<ScoredWord<'a>> = pool
            .iter()
            .enumerate()
            .map(|(i, &word)| {
                let usefulness_norm =
                    (n - usefulness_ranks[i] as f64 + self.usefulness_rank_bonus) / n;
                let commonness_norm = (n - commonness_ranks[i] as f64) / n;

                ScoredWord {
                    word,
                    usefulness: raw_usefulness[i],
                    commonness: raw_commonness[i],
                    usefulness_rank: usefulness_ranks[i],
                    commonness_rank: commonness_ranks[i],
                    score: usefulness_norm * f64::from(weights.usefulness)
                        + commonness_norm * f64::from(weights.commonness),
                }
            })
            .collect();

        entries.sort_by(|a, b| descending(a.score, b.score));

        log::trace!(
            "ranked {} candidates with weights {}/{}",
            entries.len(),
            weights.usefulness,
            weights.commonness
        );

        Ranking { entries, weights }
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Position of each value in a stable descending sort
fn descending_ranks(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| descending(values[a], values[b]));

    let mut ranks = vec![0; values.len()];
    for (rank, index) in order.into_iter().enumerate() {
        ranks[index] = rank;
    }
    ranks
}
