//! Wordle feedback parsing, calculation and representation
//!
//! Feedback is written as five characters, one per position:
//! - uppercase letter: exact match (letter is in this position)
//! - lowercase letter: partial match (letter is in the word, elsewhere)
//! - `_` or `-`: absent
//!
//! For example, guessing CRANE against SLATE gives `__A_E`.

use super::Word;
use super::letters::{ALPHABET_SIZE, WORD_LENGTH, letter_index};
use std::fmt;
use thiserror::Error;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Guessed letter is not in the answer (at least not at this position)
    Absent,
    /// Letter is in the answer but in another position
    Misplaced(u8),
    /// Letter is in the answer at this position
    Exact(u8),
}

impl Cell {
    /// The letter named by this cell, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Absent => None,
            Self::Misplaced(letter) | Self::Exact(letter) => Some(letter),
        }
    }

    /// Text protocol character for this cell
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Absent => '_',
            Self::Misplaced(letter) => letter as char,
            Self::Exact(letter) => letter.to_ascii_uppercase() as char,
        }
    }
}

/// Reasons a feedback line is rejected
///
/// All of these are recoverable: the caller asks for the feedback again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Improper amount of characters in result: expected 5, got {0}")]
    InvalidFeedbackLength(usize),
    #[error("Invalid character '{found}' at position {}: use a letter, '_' or '-'", .position + 1)]
    InvalidFeedbackCharacter { position: usize, found: char },
    #[error("Expected letter '{0}' not in result")]
    MissingExpectedLetter(char),
    #[error(
        "Earlier exact match '{}' at position {} not reflected in result",
        .expected.to_ascii_uppercase(),
        .position + 1
    )]
    ExactMatchRegression { position: usize, expected: char },
    #[error(
        "Letter '{found}' at position {} does not reflect guessed letter '{expected}'",
        .position + 1
    )]
    GuessMismatch {
        position: usize,
        expected: char,
        found: char,
    },
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Cell; WORD_LENGTH]);

impl Feedback {
    /// Parse the text protocol, checking only length and alphabet
    ///
    /// Consistency with a guess and with earlier turns is checked by
    /// [`ConstraintState::validate`](crate::guesser::ConstraintState::validate).
    ///
    /// # Errors
    /// Returns `InvalidFeedbackLength` unless there are exactly 5 characters and
    /// `InvalidFeedbackCharacter` for anything other than a letter, `_` or `-`.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Cell, Feedback};
    ///
    /// let feedback = Feedback::parse("__A-e").unwrap();
    /// assert_eq!(feedback.cell(2), Cell::Exact(b'a'));
    /// assert_eq!(feedback.cell(4), Cell::Misplaced(b'e'));
    /// assert_eq!(feedback.to_string(), "__A_e");
    /// ```
    pub fn parse(text: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidFeedbackLength(chars.len()));
        }

        let mut cells = [Cell::Absent; WORD_LENGTH];
        for (position, (&ch, cell)) in chars.iter().zip(cells.iter_mut()).enumerate() {
            *cell = match ch {
                '_' | '-' => Cell::Absent,
                'a'..='z' => Cell::Misplaced(ch as u8),
                'A'..='Z' => Cell::Exact(ch.to_ascii_lowercase() as u8),
                found => return Err(FeedbackError::InvalidFeedbackCharacter { position, found }),
            };
        }

        Ok(Self(cells))
    }

    /// Calculate the feedback when `guess` is played and `answer` is the target
    ///
    /// Implements the game's duplicate-letter rules: exact matches are assigned
    /// first, then partial matches from the letters the answer has left over.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("abide").unwrap();
    /// assert_eq!(Feedback::compute(&guess, &answer).to_string(), "__e_d");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, answer: &Word) -> Self {
        let mut cells = [Cell::Absent; WORD_LENGTH];
        let mut answer_available = [0u8; ALPHABET_SIZE];

        // First pass: exact matches, counting unmatched answer letters
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                cells[i] = Cell::Exact(g);
            } else {
                answer_available[letter_index(a)] += 1;
            }
        }

        // Second pass: partial matches from what is left
        for (i, &g) in guess.chars().iter().enumerate() {
            if cells[i] == Cell::Absent {
                let count = &mut answer_available[letter_index(g)];
                if *count > 0 {
                    cells[i] = Cell::Misplaced(g);
                    *count -= 1;
                }
            }
        }

        Self(cells)
    }

    /// Feedback of a perfect guess
    #[must_use]
    pub fn perfect(word: &Word) -> Self {
        let chars = *word.chars();
        Self(chars.map(Cell::Exact))
    }

    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.0
    }

    /// The cell at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn cell(&self, position: usize) -> Cell {
        self.0[position]
    }

    /// True if every position is an exact match
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|cell| matches!(cell, Cell::Exact(_)))
    }

    /// True if `letter` is marked present (exact or partial) at any position
    #[must_use]
    pub fn marks_present(&self, letter: u8) -> bool {
        self.0.iter().any(|cell| cell.letter() == Some(letter))
    }

    /// Count the number of exact matches
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0
            .iter()
            .filter(|cell| matches!(cell, Cell::Exact(_)))
            .count()
    }

    /// Count the number of partial matches
    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.0
            .iter()
            .filter(|cell| matches!(cell, Cell::Misplaced(_)))
            .count()
    }

    /// Convert feedback to an emoji string like "⬜🟨🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|cell| match cell {
                Cell::Exact(_) => '🟩',
                Cell::Misplaced(_) => '🟨',
                Cell::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback_for(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Feedback::compute(&guess, &answer).to_string()
    }

    #[test]
    fn parse_valid() {
        let feedback = Feedback::parse("c-A_e").unwrap();
        assert_eq!(
            feedback.cells(),
            &[
                Cell::Misplaced(b'c'),
                Cell::Absent,
                Cell::Exact(b'a'),
                Cell::Absent,
                Cell::Misplaced(b'e'),
            ]
        );
        assert_eq!(feedback.count_exact(), 1);
        assert_eq!(feedback.count_misplaced(), 2);
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(
            Feedback::parse("____"),
            Err(FeedbackError::InvalidFeedbackLength(4))
        );
        assert_eq!(
            Feedback::parse("______"),
            Err(FeedbackError::InvalidFeedbackLength(6))
        );
        assert_eq!(
            Feedback::parse(""),
            Err(FeedbackError::InvalidFeedbackLength(0))
        );
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        assert_eq!(
            Feedback::parse("🟩🟩🟩🟩🟩"),
            Err(FeedbackError::InvalidFeedbackCharacter {
                position: 0,
                found: '🟩'
            })
        );
    }

    #[test]
    fn parse_invalid_character() {
        assert_eq!(
            Feedback::parse("ab?de"),
            Err(FeedbackError::InvalidFeedbackCharacter {
                position: 2,
                found: '?'
            })
        );
        assert!(Feedback::parse("ab de").is_err());
        assert!(Feedback::parse("ab3de").is_err());
    }

    #[test]
    fn compute_all_absent() {
        assert_eq!(feedback_for("crane", "moist"), "_____");
    }

    #[test]
    fn compute_all_exact() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::compute(&word, &word);
        assert!(feedback.is_win());
        assert_eq!(feedback, Feedback::perfect(&word));
        assert_eq!(feedback.to_string(), "CRANE");
    }

    #[test]
    fn compute_real_example() {
        // C and R absent, A and E exact
        assert_eq!(feedback_for("crane", "slate"), "__A_E");
    }

    #[test]
    fn compute_duplicate_letters_exact_takes_priority() {
        // ROBOT vs FLOOR: first O partial, second O exact
        assert_eq!(feedback_for("robot", "floor"), "ro_O_");
    }

    #[test]
    fn compute_duplicate_letters_single_in_answer() {
        // SPEED vs ABIDE: only one E available, so the second is absent
        assert_eq!(feedback_for("speed", "abide"), "__e_d");
        // SPEED vs ERASE
        assert_eq!(feedback_for("speed", "erase"), "s_ee_");
    }

    #[test]
    fn marks_present_sees_either_case() {
        let feedback = Feedback::parse("__e_D").unwrap();
        assert!(feedback.marks_present(b'e'));
        assert!(feedback.marks_present(b'd'));
        assert!(!feedback.marks_present(b's'));
    }

    #[test]
    fn emoji_rendering() {
        let feedback = Feedback::parse("__A_e").unwrap();
        assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟨");
    }

    #[test]
    fn error_messages_are_human_readable() {
        let err = FeedbackError::ExactMatchRegression {
            position: 2,
            expected: 'a',
        };
        assert_eq!(
            err.to_string(),
            "Earlier exact match 'A' at position 3 not reflected in result"
        );
    }
}
