//! Session configuration

/// Tunables for a guessing session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuesserConfig {
    /// Guesses allowed before the game is lost
    pub max_turns: usize,
    /// Added to the usefulness rank numerator when normalising ranks
    pub usefulness_rank_bonus: f64,
}

impl GuesserConfig {
    pub const DEFAULT_MAX_TURNS: usize = 6;
    pub const DEFAULT_RANK_BONUS: f64 = 1.0;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            usefulness_rank_bonus: Self::DEFAULT_RANK_BONUS,
        }
    }

    #[must_use]
    pub const fn with_rank_bonus(mut self, bonus: f64) -> Self {
        self.usefulness_rank_bonus = bonus;
        self
    }
}

impl Default for GuesserConfig {
    fn default() -> Self {
        Self::new()
    }
}
