//! Benchmark command
//!
//! Plays simulated games against many answers. Games are independent, so
//! they run in parallel over a shared corpus.

use super::solve::solve_target;
use crate::core::{Word, WordCorpus};
use crate::guesser::GuesserConfig;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Default)]
pub struct BenchmarkConfig {
    pub guesser: GuesserConfig,
    /// Play this word first in every game
    pub first_word: Option<String>,
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Answers the guesser did not find
    pub failures: Vec<String>,
    /// Guesses summed over solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Pick `count` distinct answers from the corpus
///
/// The same seed always picks the same words.
#[must_use]
pub fn select_targets(corpus: &WordCorpus, count: usize, seed: u64) -> Vec<&Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    corpus.words().choose_multiple(&mut rng, count).collect()
}

/// Run benchmark on a set of target words
///
/// # Errors
///
/// Returns an error if the forced first word is not in the corpus, or the
/// progress bar template is invalid.
pub fn run_benchmark(
    corpus: &WordCorpus,
    targets: &[&Word],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let games = targets
        .par_iter()
        .map(|&target| {
            let result = solve_target(corpus, target, config.guesser, config.first_word.as_deref());
            pb.inc(1);
            result.map(|solved| (target, solved.success, solved.guesses.len()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    for &(target, success, guesses) in &games {
        if success {
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(target.to_string());
        }
    }

    let solved = games.len() - failures.len();
    let total_guesses: usize = distribution.iter().map(|(guesses, count)| guesses * count).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };
    log::info!(
        "benchmark: {solved}/{} solved in {:.2}s",
        games.len(),
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        total_words: games.len(),
        solved,
        failures,
        total_guesses,
        average_guesses,
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        words_per_second: games.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_corpus;
    use crate::wordlists::loader::words_from_slice;

    fn corpus(words: &[&str]) -> WordCorpus {
        words_from_slice(words).into_iter().collect()
    }

    #[test]
    fn benchmark_runs() {
        let corpus = embedded_corpus();
        let targets = select_targets(&corpus, 20, 7);
        let result = run_benchmark(&corpus, &targets, &BenchmarkConfig::default()).unwrap();

        assert_eq!(result.total_words, 20);
        assert_eq!(result.solved + result.failures.len(), 20);
        if result.solved > 0 {
            assert!(result.min_guesses >= 1);
            assert!(result.max_guesses <= GuesserConfig::DEFAULT_MAX_TURNS);
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let corpus = embedded_corpus();
        let targets = select_targets(&corpus, 15, 3);
        let result = run_benchmark(&corpus, &targets, &BenchmarkConfig::default()).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_small_corpus_wins_everything() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let targets: Vec<&Word> = corpus.words().iter().collect();
        let result = run_benchmark(&corpus, &targets, &BenchmarkConfig::default()).unwrap();

        assert_eq!(result.solved, 4);
        assert!(result.failures.is_empty());
        assert!((result.win_rate() - 100.0).abs() < f64::EPSILON);
        assert_eq!(result.distribution.get(&1), Some(&1));
    }

    #[test]
    fn benchmark_with_forced_first_word() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let targets: Vec<&Word> = corpus.words().iter().collect();
        let config = BenchmarkConfig {
            first_word: Some("moist".to_string()),
            ..BenchmarkConfig::default()
        };
        let result = run_benchmark(&corpus, &targets, &config).unwrap();

        assert_eq!(result.total_words, 4);
        assert_eq!(result.distribution.get(&1), Some(&1));
    }

    #[test]
    fn benchmark_rejects_unknown_first_word() {
        let corpus = corpus(&["crane", "slate"]);
        let targets: Vec<&Word> = corpus.words().iter().collect();
        let config = BenchmarkConfig {
            first_word: Some("zebra".to_string()),
            ..BenchmarkConfig::default()
        };

        assert!(run_benchmark(&corpus, &targets, &config).is_err());
    }

    #[test]
    fn benchmark_empty_word_list() {
        let corpus = embedded_corpus();
        let result = run_benchmark(&corpus, &[], &BenchmarkConfig::default()).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn same_seed_same_targets() {
        let corpus = embedded_corpus();
        let first = select_targets(&corpus, 10, 42);
        let second = select_targets(&corpus, 10, 42);

        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
    }

    #[test]
    fn sample_never_exceeds_corpus() {
        let corpus = corpus(&["crane", "slate"]);
        assert_eq!(select_targets(&corpus, 10, 1).len(), 2);
    }
}
