//! Word lists for the guesser
//!
//! Provides the embedded corpus compiled into the binary, plus loaders for
//! lists kept on disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::WordCorpus;

/// The embedded corpus, ready to play with
#[must_use]
pub fn embedded_corpus() -> WordCorpus {
    loader::words_from_slice(WORDS).into_iter().collect()
}
