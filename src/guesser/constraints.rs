//! Knowledge accumulated from feedback
//!
//! Tracks which letters are confirmed, which positions are locked and which
//! letters are ruled out, either everywhere or at one position.

use crate::core::{Cell, Feedback, FeedbackError, LetterSet, WORD_LENGTH, Word};

/// Letter and position constraints learned so far in a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    correct_letters: Vec<u8>,
    exact_matches: [Option<u8>; WORD_LENGTH],
    partial_matches: [LetterSet; WORD_LENGTH],
    available_letters: LetterSet,
}

impl ConstraintState {
    /// Fresh state where every letter in `available` is still possible
    #[must_use]
    pub const fn new(available: LetterSet) -> Self {
        Self {
            correct_letters: Vec::new(),
            exact_matches: [None; WORD_LENGTH],
            partial_matches: [LetterSet::EMPTY; WORD_LENGTH],
            available_letters: available,
        }
    }

    /// Letters known to be in the answer, in the order they were found
    #[inline]
    #[must_use]
    pub fn correct_letters(&self) -> &[u8] {
        &self.correct_letters
    }

    #[inline]
    #[must_use]
    pub const fn exact_matches(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.exact_matches
    }

    /// Letters ruled out at each position
    #[inline]
    #[must_use]
    pub const fn partial_matches(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.partial_matches
    }

    #[inline]
    #[must_use]
    pub const fn available_letters(&self) -> LetterSet {
        self.available_letters
    }

    /// Number of positions whose letter is locked
    #[must_use]
    pub fn known_exact_positions(&self) -> usize {
        self.exact_matches.iter().flatten().count()
    }

    /// Letters ruled out everywhere, relative to `universe`
    #[must_use]
    pub fn excluded_letters(&self, universe: LetterSet) -> LetterSet {
        universe
            .iter()
            .filter(|&letter| !self.available_letters.contains(letter))
            .collect()
    }

    /// Check a feedback line for `guess` against the game so far
    ///
    /// Pure: the state is not touched. Rules, in the order they are checked:
    /// exactly 5 characters; only letters, `_` and `-`; every confirmed letter
    /// is mentioned again; locked positions repeat their uppercase letter; each
    /// letter matches the guessed letter at its position.
    ///
    /// # Errors
    /// Returns the first rule the feedback breaks.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{FeedbackError, LetterSet, Word};
    /// use wordle_guesser::guesser::ConstraintState;
    ///
    /// let state = ConstraintState::new(LetterSet::ALL);
    /// let guess = Word::new("crane").unwrap();
    ///
    /// assert!(state.validate(&guess, "__A_e").is_ok());
    /// assert_eq!(
    ///     state.validate(&guess, "__O__"),
    ///     Err(FeedbackError::GuessMismatch { position: 2, expected: 'a', found: 'O' })
    /// );
    /// ```
    pub fn validate(&self, guess: &Word, text: &str) -> Result<Feedback, FeedbackError> {
        let feedback = Feedback::parse(text)?;

        if let Some(&missing) = self
            .correct_letters
            .iter()
            .find(|&&letter| !feedback.marks_present(letter))
        {
            return Err(FeedbackError::MissingExpectedLetter(missing as char));
        }

        for (position, (&cell, &guessed)) in
            feedback.cells().iter().zip(guess.chars()).enumerate()
        {
            if let Some(expected) = self.exact_matches[position]
                && cell != Cell::Exact(expected)
            {
                return Err(FeedbackError::ExactMatchRegression {
                    position,
                    expected: expected as char,
                });
            }

            if let Some(letter) = cell.letter()
                && letter != guessed
            {
                let found = text.chars().nth(position).unwrap_or(letter as char);
                return Err(FeedbackError::GuessMismatch {
                    position,
                    expected: guessed as char,
                    found,
                });
            }
        }

        Ok(feedback)
    }

    /// Fold validated feedback for `guess` into the state
    ///
    /// Confirmed letters and locked positions only ever grow; available letters
    /// only ever shrink, and never lose a confirmed letter.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (position, (&cell, &guessed)) in
            feedback.cells().iter().zip(guess.chars()).enumerate()
        {
            match cell {
                Cell::Absent => {
                    // A repeated letter can be absent here but present elsewhere
                    if !feedback.marks_present(guessed)
                        && !self.correct_letters.contains(&guessed)
                        && self.available_letters.remove(guessed)
                    {
                        log::trace!("letter '{}' ruled out", guessed as char);
                    }
                    self.partial_matches[position].insert(guessed);
                }
                Cell::Misplaced(letter) => {
                    self.confirm(letter);
                    self.partial_matches[position].insert(letter);
                }
                Cell::Exact(letter) => {
                    self.confirm(letter);
                    debug_assert!(
                        self.exact_matches[position].is_none_or(|locked| locked == letter),
                        "exact match at position {position} changed"
                    );
                    self.exact_matches[position] = Some(letter);
                }
            }
        }
    }

    fn confirm(&mut self, letter: u8) {
        if !self.correct_letters.contains(&letter) {
            self.correct_letters.push(letter);
        }
    }
}
