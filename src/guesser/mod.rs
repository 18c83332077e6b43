//! The guess-ranking engine
//!
//! Feedback flows into [`ConstraintState`], which prunes the [`CandidatePool`];
//! [`LetterStatistics`] over the pool feed the [`ScoringEngine`], and
//! [`Session`] runs the turn-by-turn state machine on top.

mod config;
mod constraints;
pub mod pool;
pub mod scoring;
mod session;
mod statistics;

pub use config::GuesserConfig;
pub use constraints::ConstraintState;
pub use pool::{CandidatePool, is_possible};
pub use scoring::{Ranking, ScoredWord, ScoringEngine, Weights, usefulness};
pub use session::{ExhaustedReason, Outcome, Session, SessionError, SessionState, TurnRecord};
pub use statistics::LetterStatistics;
