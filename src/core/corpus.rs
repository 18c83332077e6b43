//! The ordered word corpus
//!
//! Order encodes commonness: the first word is the most common one.

use super::Word;
use super::letters::LetterSet;
use rustc_hash::FxHashMap;

/// Read-only, ordered list of valid guess words
///
/// Built once and borrowed by every session that plays with it.
#[derive(Debug, Clone, Default)]
pub struct WordCorpus {
    words: Vec<Word>,
    ranks: FxHashMap<[u8; 5], usize>,
    letters: LetterSet,
}

impl WordCorpus {
    /// Build a corpus from words in commonness order
    ///
    /// Repeated words keep the rank of their first occurrence.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Word, WordCorpus};
    ///
    /// let corpus = WordCorpus::new(["crane", "slate", "crane"].map(|w| Word::new(w).unwrap()));
    /// assert_eq!(corpus.len(), 2);
    /// assert_eq!(corpus.rank_of(&Word::new("slate").unwrap()), Some(1));
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut corpus = Self::default();

        for word in words {
            if corpus.ranks.contains_key(word.chars()) {
                log::trace!("skipping repeated corpus word {word}");
                continue;
            }
            corpus.ranks.insert(*word.chars(), corpus.words.len());
            for &letter in word.chars() {
                corpus.letters.insert(letter);
            }
            corpus.words.push(word);
        }

        corpus
    }

    /// Words in commonness order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
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

    /// 0-based commonness rank of a word, if it is in the corpus
    #[inline]
    #[must_use]
    pub fn rank_of(&self, word: &Word) -> Option<usize> {
        self.ranks.get(word.chars()).copied()
    }

    /// Look up a corpus word by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.rank_of(&word).map(|rank| &self.words[rank])
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.ranks.contains_key(word.chars())
    }

    /// Every letter used by at least one corpus word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Commonness of a word: `(n / (rank + 1)) / n`
    ///
    /// The most common word scores 1.0 and the score decays harmonically with
    /// rank. Words outside the corpus score 0.0.
    #[must_use]
    pub fn commonness(&self, word: &Word) -> f64 {
        let total = self.len() as f64;
        self.rank_of(word)
            .map_or(0.0, |rank| (total / (rank as f64 + 1.0)) / total)
    }
}

impl FromIterator<Word> for WordCorpus {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}
