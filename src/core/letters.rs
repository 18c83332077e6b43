//! Letters, positions and compact letter sets

use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Size of the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter in the alphabet (`b'a'` → 0)
///
/// # Panics
/// Panics in debug mode if `letter` is not a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    (letter - b'a') as usize
}

/// Letter at an alphabet index (0 → `b'a'`)
#[inline]
#[must_use]
pub const fn letter_at(index: usize) -> u8 {
    b'a' + index as u8
}

/// A set of lowercase letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALL: Self = Self((1 << ALPHABET_SIZE) - 1);

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    /// Add a letter, returning true if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let added = !self.contains(letter);
        self.0 |= 1 << letter_index(letter);
        added
    }

    /// Remove a letter, returning true if it was present
    #[inline]
    pub fn remove(&mut self, letter: u8) -> bool {
        let present = self.contains(letter);
        self.0 &= !(1 << letter_index(letter));
        present
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(letter_at)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
