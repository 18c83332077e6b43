//! The shrinking pool of candidate words

use super::ConstraintState;
use crate::core::{Word, WordCorpus};

/// Check whether `word` is still consistent with everything learned so far
///
/// True iff every letter is still available, every locked position matches,
/// no letter sits in a position it was excluded from, and every confirmed
/// letter occurs somewhere in the word.
#[must_use]
pub fn is_possible(word: &Word, state: &ConstraintState) -> bool {
    let available = state.available_letters();
    let chars = word.chars();

    chars.iter().all(|&letter| available.contains(letter))
        && state
            .exact_matches()
            .iter()
            .zip(chars)
            .all(|(exact, &letter)| exact.is_none_or(|locked| locked == letter))
        && state
            .partial_matches()
            .iter()
            .zip(chars)
            .all(|(excluded, &letter)| !excluded.contains(letter))
        && state
            .correct_letters()
            .iter()
            .all(|&letter| word.has_letter(letter))
}

/// Words still consistent with the game, in corpus order
///
/// The pool only ever shrinks.
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    words: Vec<&'a Word>,
}

impl<'a> CandidatePool<'a> {
    /// Pool holding the whole corpus
    #[must_use]
    pub fn new(corpus: &'a WordCorpus) -> Self {
        Self {
            words: corpus.words().iter().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|&w| w == word)
    }

    /// Drop a word, returning true if it was in the pool
    pub fn remove(&mut self, word: &Word) -> bool {
        let before = self.words.len();
        self.words.retain(|&w| w != word);
        self.words.len() != before
    }

    /// Keep only words that pass [`is_possible`]
    ///
    /// Returns the number of words removed.
    pub fn prune(&mut self, state: &ConstraintState) -> usize {
        let before = self.words.len();
        self.words.retain(|word| is_possible(word, state));
        let removed = before - self.words.len();
        log::debug!("pruned {removed} words, {} candidates remain", self.words.len());
        removed
    }

    /// Remove the word just guessed, then prune against the updated state
    pub fn narrow(&mut self, guess: &Word, state: &ConstraintState) -> usize {
        let removed = usize::from(self.remove(guess));
        removed + self.prune(state)
    }
}
