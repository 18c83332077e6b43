//! Core domain types for Wordle
//!
//! Words, letters, feedback and the ordered corpus. Nothing here knows about
//! ranking or game state.

mod corpus;
mod feedback;
pub mod letters;
mod word;

pub use corpus::WordCorpus;
pub use feedback::{Cell, Feedback, FeedbackError};
pub use letters::{LetterSet, WORD_LENGTH};
pub use word::{Word, WordError};
