//! Word solving command
//!
//! Plays a whole game against a known answer. Feedback for each guess is
//! generated with the game's own duplicate-letter rules and fed back through
//! the session exactly as a player would type it.

use crate::core::{Feedback, Word, WordCorpus};
use crate::guesser::{GuesserConfig, Outcome, Session, SessionError, Weights};
use anyhow::{Context, Result};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub guesser: GuesserConfig,
    /// Play this word first instead of the top suggestion
    pub first_word: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            guesser: GuesserConfig::new(),
            first_word: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub weights: Weights,
    /// Metrics from the ranking, absent for a forced word outside the pool
    pub score: Option<StepScore>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepScore {
    pub usefulness: f64,
    pub commonness: f64,
    pub score: f64,
}

/// Solve a specific word against the corpus
///
/// The target does not have to be in the corpus; such a game just never wins.
///
/// # Errors
///
/// Returns an error if the target is not a valid five-letter word or the
/// forced first word is not in the corpus.
pub fn solve_word(config: &SolveConfig, corpus: &WordCorpus) -> Result<SolveResult> {
    let target = Word::new(config.target.trim())
        .with_context(|| format!("invalid target word '{}'", config.target))?;

    if !corpus.contains(&target) {
        log::warn!("'{target}' is not in the word list, it can never be guessed");
    }

    let result = solve_target(corpus, &target, config.guesser, config.first_word.as_deref())?;
    Ok(result)
}

/// Play one game against `target`
///
/// # Errors
///
/// Returns `UnknownWord` if `first_word` is not in the corpus.
pub fn solve_target(
    corpus: &WordCorpus,
    target: &Word,
    config: GuesserConfig,
    first_word: Option<&str>,
) -> Result<SolveResult, SessionError> {
    let mut session = Session::with_config(corpus, config);
    let mut guesses = Vec::new();

    while session.next_guess()?.is_some() {
        let forced = first_word.filter(|_| session.history().is_empty());
        let candidates_before = session.pool().len();
        let weights = session.weights();

        let score = session
            .ranking()
            .and_then(|ranking| match forced {
                Some(text) => ranking.entries().iter().find(|e| e.word.text() == text),
                None => ranking.best(),
            })
            .map(|entry| StepScore {
                usefulness: entry.usefulness,
                commonness: entry.commonness,
                score: entry.score,
            });

        let guess = match forced {
            Some(text) => session.guess_word(text)?,
            None => session.accept_guess()?,
        };

        let feedback = Feedback::compute(guess, target);
        let outcome = session.submit_feedback(&feedback.to_string())?;
        let candidates_after = session
            .history()
            .last()
            .map_or(0, |record| record.candidates_after);

        guesses.push(GuessStep {
            word: guess.clone(),
            feedback,
            candidates_before,
            candidates_after,
            weights,
            score,
        });

        match outcome {
            Outcome::Continue { .. } => {}
            Outcome::Won { .. } => {
                return Ok(SolveResult {
                    success: true,
                    guesses,
                    target: target.to_string(),
                });
            }
            Outcome::Exhausted { .. } => break,
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.to_string(),
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

    fn played(result: &SolveResult) -> Vec<&str> {
        result.guesses.iter().map(|step| step.word.text()).collect()
    }

    #[test]
    fn solve_word_succeeds() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let result = solve_word(&SolveConfig::new("moist".to_string()), &corpus).unwrap();

        assert!(result.success);
        assert_eq!(played(&result), ["crane", "moist"]);
        assert_eq!(result.guesses[0].feedback.to_string(), "_____");
        assert_eq!(result.guesses[0].candidates_before, 4);
        assert_eq!(result.guesses[0].candidates_after, 1);
        assert!(result.guesses[1].feedback.is_win());
    }

    #[test]
    fn first_guess_weights_favour_usefulness() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let result = solve_word(&SolveConfig::new("moist".to_string()), &corpus).unwrap();

        let weights = result.guesses[0].weights;
        assert_eq!((weights.usefulness, weights.commonness), (9, 1));
        assert!(result.guesses[0].score.is_some());
    }

    #[test]
    fn forced_first_word_is_played() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let mut config = SolveConfig::new("moist".to_string());
        config.first_word = Some("adieu".to_string());

        let result = solve_word(&config, &corpus).unwrap();

        assert!(result.success);
        assert_eq!(played(&result), ["adieu", "moist"]);
        assert_eq!(result.guesses[0].feedback.to_string(), "__I__");
    }

    #[test]
    fn unknown_forced_word_is_an_error() {
        let corpus = corpus(&["crane", "slate"]);
        let mut config = SolveConfig::new("slate".to_string());
        config.first_word = Some("zebra".to_string());

        assert!(solve_word(&config, &corpus).is_err());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let corpus = corpus(&["crane", "slate"]);
        assert!(solve_word(&SolveConfig::new("abc".to_string()), &corpus).is_err());
        assert!(solve_word(&SolveConfig::new("cr4ne".to_string()), &corpus).is_err());
    }

    #[test]
    fn target_outside_corpus_is_never_won() {
        let corpus = corpus(&["crane", "slate"]);
        let result = solve_word(&SolveConfig::new("zzzzz".to_string()), &corpus).unwrap();

        assert!(!result.success);
        assert_eq!(played(&result), ["crane"]);
        assert_eq!(result.guesses[0].candidates_after, 0);
    }

    #[test]
    fn solve_records_history() {
        let corpus = embedded_corpus();
        let result = solve_word(&SolveConfig::new("mound".to_string()), &corpus).unwrap();

        assert!(!result.guesses.is_empty());
        assert!(result.guesses.len() <= GuesserConfig::DEFAULT_MAX_TURNS);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_respects_turn_limit() {
        let corpus = embedded_corpus();
        let mut config = SolveConfig::new("mound".to_string());
        config.guesser.max_turns = 1;

        let result = solve_word(&config, &corpus).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }
}
