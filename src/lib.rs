//! Wordle Guesser
//!
//! Suggests guesses for five-letter word games from a frequency-ordered word
//! list. Each guess is ranked on two signals: how well its letters match where
//! the remaining candidates put them, and how common the word is. Early turns
//! lean on the first, later turns on the second.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesser::core::{Feedback, Word};
//! use wordle_guesser::guesser::{Outcome, Session};
//! use wordle_guesser::wordlists::embedded_corpus;
//!
//! let corpus = embedded_corpus();
//! let answer = Word::new("mound").unwrap();
//! let mut session = Session::new(&corpus);
//!
//! loop {
//!     let Some(guess) = session.next_guess().unwrap() else { break };
//!     session.accept_guess().unwrap();
//!
//!     // Feedback as typed by a player: uppercase exact, lowercase misplaced, `_` absent
//!     let feedback = Feedback::compute(guess, &answer).to_string();
//!     match session.submit_feedback(&feedback).unwrap() {
//!         Outcome::Continue { .. } => {}
//!         Outcome::Won { turns } => {
//!             println!("solved in {turns}");
//!             break;
//!         }
//!         Outcome::Exhausted { .. } => break,
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Constraint tracking, candidate pruning and ranking
pub mod guesser;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
