//! Positional letter frequencies over the candidate pool
//!
//! A snapshot: rebuilt from the current pool every turn, never updated in place.

use crate::core::letters::{ALPHABET_SIZE, letter_at, letter_index};
use crate::core::{WORD_LENGTH, Word};

/// `position_uses[letter][position]` = number of pool words with `letter` at `position`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStatistics {
    position_uses: [[u32; WORD_LENGTH]; ALPHABET_SIZE],
    words: usize,
}

impl LetterStatistics {
    /// Count letters by position across `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    /// use wordle_guesser::guesser::LetterStatistics;
    ///
    /// let words = [Word::new("crane").unwrap(), Word::new("crate").unwrap()];
    /// let stats = LetterStatistics::from_words(&words);
    /// assert_eq!(stats.uses(b'c', 0), 2);
    /// assert_eq!(stats.uses(b'n', 3), 1);
    /// ```
    pub fn from_words<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut position_uses = [[0u32; WORD_LENGTH]; ALPHABET_SIZE];
        let mut count = 0;

        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                position_uses[letter_index(letter)][position] += 1;
            }
            count += 1;
        }

        Self {
            position_uses,
            words: count,
        }
    }

    /// Number of words the snapshot was built from
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }

    /// How many words have `letter` at `position`
    #[inline]
    #[must_use]
    pub const fn uses(&self, letter: u8, position: usize) -> u32 {
        self.position_uses[letter_index(letter)][position]
    }

    /// All 26 letters, most used at `position` first
    ///
    /// Ties keep alphabetical order.
    #[must_use]
    pub fn likely_letters(&self, position: usize) -> [u8; ALPHABET_SIZE] {
        let mut letters: [u8; ALPHABET_SIZE] = std::array::from_fn(letter_at);
        letters.sort_by_key(|&letter| std::cmp::Reverse(self.uses(letter, position)));
        letters
    }

    /// [`likely_letters`](Self::likely_letters) for every position
    #[must_use]
    pub fn likely_letters_by_position(&self) -> [[u8; ALPHABET_SIZE]; WORD_LENGTH] {
        std::array::from_fn(|position| self.likely_letters(position))
    }
}
