//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_targets};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_target, solve_word};
pub use stats::{OpeningGuess, StatsResult, analyze_corpus};
