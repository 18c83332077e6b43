//! Corpus statistics command
//!
//! Shows which letters the corpus favours at each position and how the
//! opening guesses rank before any feedback.

use crate::core::{WORD_LENGTH, Word, WordCorpus};
use crate::guesser::{GuesserConfig, Session, Weights};
use anyhow::{Context, Result, bail};

/// Letters shown per position
pub const LIKELY_LETTERS_SHOWN: usize = 5;

/// A ranked opening guess
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningGuess {
    pub rank: usize,
    pub word: String,
    pub usefulness: f64,
    pub commonness: f64,
    pub score: f64,
}

/// Result of analysing the corpus
pub struct StatsResult {
    pub total_words: usize,
    /// Most used letters per position, with their counts
    pub likely_letters: [Vec<(u8, u32)>; WORD_LENGTH],
    pub weights: Weights,
    pub top: Vec<OpeningGuess>,
    /// The word asked about, when it is not already in `top`
    pub focus: Option<OpeningGuess>,
}

/// Rank the whole corpus as a first guess
///
/// # Errors
///
/// Returns an error if the corpus is empty, or `word` is given but is not a
/// corpus word.
pub fn analyze_corpus(
    corpus: &WordCorpus,
    top: usize,
    word: Option<&str>,
    config: GuesserConfig,
) -> Result<StatsResult> {
    if corpus.is_empty() {
        bail!("the word list is empty");
    }

    let focus_word = word
        .map(|text| -> Result<&Word> {
            let parsed = Word::new(text.trim()).with_context(|| format!("invalid word '{text}'"))?;
            corpus
                .get(parsed.text())
                .with_context(|| format!("'{parsed}' is not in the word list"))
        })
        .transpose()?;

    let mut session = Session::with_config(corpus, config);
    session.next_guess()?;
    let stats = session.statistics();
    let ranking = session
        .ranking()
        .context("no ranking for a non-empty word list")?;

    let by_position = stats.likely_letters_by_position();
    let likely_letters = std::array::from_fn(|position| {
        by_position[position]
            .iter()
            .take(LIKELY_LETTERS_SHOWN)
            .map(|&letter| (letter, stats.uses(letter, position)))
            .filter(|&(_, uses)| uses > 0)
            .collect()
    });

    let opening = |rank: usize| {
        ranking.get(rank).map(|entry| OpeningGuess {
            rank: rank + 1,
            word: entry.word.to_string(),
            usefulness: entry.usefulness,
            commonness: entry.commonness,
            score: entry.score,
        })
    };

    let top_guesses: Vec<OpeningGuess> = (0..top.min(ranking.len())).filter_map(&opening).collect();

    let focus = focus_word.and_then(|target| {
        let rank = ranking.entries().iter().position(|entry| entry.word == target)?;
        (rank >= top_guesses.len()).then(|| opening(rank)).flatten()
    });

    Ok(StatsResult {
        total_words: corpus.len(),
        likely_letters,
        weights: ranking.weights(),
        top: top_guesses,
        focus,
    })
}
