//! One game of guessing
//!
//! A session owns the constraint state and candidate pool, borrows the corpus,
//! and moves through `AwaitingGuess → AwaitingFeedback → AwaitingGuess | Won |
//! Exhausted`.

use super::{
    CandidatePool, ConstraintState, GuesserConfig, LetterStatistics, Ranking, ScoredWord,
    ScoringEngine, Weights,
};
use crate::core::{Feedback, FeedbackError, Word, WordCorpus};
use thiserror::Error;

/// Why a game ended without a win
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustedReason {
    /// The pool is empty, or every suggestion was rejected
    NoCandidates,
    /// The last allowed guess was not the answer
    TurnLimit,
}

/// Where the session is in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState<'a> {
    /// Waiting for guess number `turn` to be chosen
    AwaitingGuess { turn: usize },
    /// Guess number `turn` was played; waiting for its feedback
    AwaitingFeedback { turn: usize, guess: &'a Word },
    Won { turns: usize },
    Exhausted { reason: ExhaustedReason },
}

impl SessionState<'_> {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Exhausted { .. })
    }
}

/// Result of submitting feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game goes on with `remaining` candidates
    Continue { remaining: usize },
    Won { turns: usize },
    Exhausted { reason: ExhaustedReason },
}

/// Misuse of the session API, or rejected feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
    #[error("no guess is waiting for feedback")]
    NoPendingGuess,
    #[error("feedback for '{0}' is still pending")]
    FeedbackPending(String),
    #[error("no suggestion to accept, ask for a guess first")]
    NoSuggestion,
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),
    #[error("the game is already over")]
    Finished,
}

/// A completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord<'a> {
    pub guess: &'a Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A single game against one hidden word
///
/// # Examples
/// ```
/// use wordle_guesser::core::{Word, WordCorpus};
/// use wordle_guesser::guesser::{Outcome, Session};
///
/// let corpus: WordCorpus = ["crane", "slate", "adieu", "moist"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let mut session = Session::new(&corpus);
///
/// let guess = session.next_guess().unwrap().unwrap();
/// assert_eq!(guess.text(), "crane");
/// session.accept_guess().unwrap();
///
/// let outcome = session.submit_feedback("_____").unwrap();
/// assert_eq!(outcome, Outcome::Continue { remaining: 1 });
/// assert_eq!(session.next_guess().unwrap().map(Word::text), Some("moist"));
/// ```
#[derive(Debug, Clone)]
pub struct Session<'a> {
    corpus: &'a WordCorpus,
    config: GuesserConfig,
    engine: ScoringEngine,
    constraints: ConstraintState,
    pool: CandidatePool<'a>,
    state: SessionState<'a>,
    ranking: Option<Ranking<'a>>,
    cursor: usize,
    history: Vec<TurnRecord<'a>>,
}

impl<'a> Session<'a> {
    /// Start a game with the default configuration
    #[must_use]
    pub fn new(corpus: &'a WordCorpus) -> Self {
        Self::with_config(corpus, GuesserConfig::default())
    }

    #[must_use]
    pub fn with_config(corpus: &'a WordCorpus, config: GuesserConfig) -> Self {
        log::debug!("new session over {} words", corpus.len());
        Self {
            corpus,
            config,
            engine: ScoringEngine::new(config.usefulness_rank_bonus),
            constraints: ConstraintState::new(corpus.letters()),
            pool: CandidatePool::new(corpus),
            state: SessionState::AwaitingGuess { turn: 1 },
            ranking: None,
            cursor: 0,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &SessionState<'a> {
        &self.state
    }

    /// Number of guesses played so far
    #[inline]
    #[must_use]
    pub fn turn(&self) -> usize {
        let pending = matches!(self.state, SessionState::AwaitingFeedback { .. });
        self.history.len() + usize::from(pending)
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'a WordCorpus {
        self.corpus
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GuesserConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &CandidatePool<'a> {
        &self.pool
    }

    /// Turns whose feedback has been accepted, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[TurnRecord<'a>] {
        &self.history
    }

    /// Ranking computed by the last [`next_guess`](Self::next_guess)
    #[inline]
    #[must_use]
    pub const fn ranking(&self) -> Option<&Ranking<'a>> {
        self.ranking.as_ref()
    }

    /// The ranked entry currently on offer
    #[must_use]
    pub fn suggestion(&self) -> Option<&ScoredWord<'a>> {
        self.ranking.as_ref()?.get(self.cursor)
    }

    /// Fresh letter statistics for the current pool
    #[must_use]
    pub fn statistics(&self) -> LetterStatistics {
        LetterStatistics::from_words(self.pool.words().iter().copied())
    }

    /// Weights the next ranking will use
    #[must_use]
    pub fn weights(&self) -> Weights {
        let turn = match self.state {
            SessionState::AwaitingGuess { turn } | SessionState::AwaitingFeedback { turn, .. } => {
                turn
            }
            _ => self.history.len(),
        };
        Weights::for_turn(&self.constraints, turn)
    }

    /// Rank the pool and offer the best guess
    ///
    /// Returns `Ok(None)` when no candidates remain; the session is then
    /// exhausted.
    ///
    /// # Errors
    /// `FeedbackPending` if the last guess still needs feedback, `Finished`
    /// after a win.
    pub fn next_guess(&mut self) -> Result<Option<&'a Word>, SessionError> {
        match self.state {
            SessionState::AwaitingGuess { .. } => {}
            SessionState::AwaitingFeedback { guess, .. } => {
                return Err(SessionError::FeedbackPending(guess.to_string()));
            }
            SessionState::Won { .. } => return Err(SessionError::Finished),
            SessionState::Exhausted { .. } => return Ok(None),
        }

        if self.pool.is_empty() {
            self.exhaust(ExhaustedReason::NoCandidates);
            return Ok(None);
        }

        let weights = self.weights();
        log::debug!(
            "turn {}: ranking {} candidates (usefulness {}, commonness {})",
            self.history.len() + 1,
            self.pool.len(),
            weights.usefulness,
            weights.commonness
        );

        let stats = self.statistics();
        let ranking = self
            .engine
            .rank(self.pool.words(), &stats, self.corpus, weights);
        let best = ranking.best().map(|entry| entry.word);

        self.ranking = Some(ranking);
        self.cursor = 0;
        Ok(best)
    }

    /// Turn down the current suggestion and offer the next-ranked one
    ///
    /// Returns `Ok(None)` once the ranking runs out; the session is then
    /// exhausted.
    ///
    /// # Errors
    /// `NoSuggestion` if nothing is on offer.
    pub fn reject_guess(&mut self) -> Result<Option<&'a Word>, SessionError> {
        self.ensure_awaiting_guess()?;
        let ranking = self.ranking.as_ref().ok_or(SessionError::NoSuggestion)?;

        self.cursor += 1;
        if let Some(entry) = ranking.get(self.cursor) {
            return Ok(Some(entry.word));
        }

        self.exhaust(ExhaustedReason::NoCandidates);
        Ok(None)
    }

    /// Play the suggestion currently on offer
    ///
    /// # Errors
    /// `NoSuggestion` if [`next_guess`](Self::next_guess) has not been called.
    pub fn accept_guess(&mut self) -> Result<&'a Word, SessionError> {
        self.ensure_awaiting_guess()?;
        let word = self.suggestion().ok_or(SessionError::NoSuggestion)?.word;
        self.play(word);
        Ok(word)
    }

    /// Play any corpus word instead of a suggestion
    ///
    /// # Errors
    /// `UnknownWord` if `text` is not in the corpus.
    pub fn guess_word(&mut self, text: &str) -> Result<&'a Word, SessionError> {
        self.ensure_awaiting_guess()?;
        let corpus = self.corpus;
        let word = corpus
            .get(text)
            .ok_or_else(|| SessionError::UnknownWord(text.to_string()))?;
        self.play(word);
        Ok(word)
    }

    /// Check feedback for the pending guess without applying it
    ///
    /// # Errors
    /// `NoPendingGuess` if no guess was played, otherwise the feedback error.
    pub fn validate_feedback(&self, text: &str) -> Result<Feedback, SessionError> {
        let guess = self.pending_guess()?;
        Ok(self.constraints.validate(guess, text)?)
    }

    /// Apply feedback for the pending guess and advance the game
    ///
    /// Rejected feedback leaves the session untouched, so the caller can ask
    /// again.
    ///
    /// # Errors
    /// `NoPendingGuess` if no guess was played, otherwise the feedback error.
    pub fn submit_feedback(&mut self, text: &str) -> Result<Outcome, SessionError> {
        let guess = self.pending_guess()?;
        let feedback = self.constraints.validate(guess, text)?;
        let turn = self.history.len() + 1;
        let candidates_before = self.pool.len();

        if feedback.is_win() {
            self.history.push(TurnRecord {
                guess,
                feedback,
                candidates_before,
                candidates_after: 1,
            });
            self.state = SessionState::Won { turns: turn };
            log::info!("solved '{guess}' in {turn}");
            return Ok(Outcome::Won { turns: turn });
        }

        self.constraints.apply(guess, &feedback);
        self.pool.narrow(guess, &self.constraints);
        self.history.push(TurnRecord {
            guess,
            feedback,
            candidates_before,
            candidates_after: self.pool.len(),
        });

        if self.pool.is_empty() {
            self.exhaust(ExhaustedReason::NoCandidates);
            return Ok(Outcome::Exhausted {
                reason: ExhaustedReason::NoCandidates,
            });
        }
        if turn >= self.config.max_turns {
            self.exhaust(ExhaustedReason::TurnLimit);
            return Ok(Outcome::Exhausted {
                reason: ExhaustedReason::TurnLimit,
            });
        }

        self.state = SessionState::AwaitingGuess { turn: turn + 1 };
        Ok(Outcome::Continue {
            remaining: self.pool.len(),
        })
    }

    fn play(&mut self, word: &'a Word) {
        let turn = self.history.len() + 1;
        log::debug!("turn {turn}: playing '{word}'");
        self.state = SessionState::AwaitingFeedback { turn, guess: word };
        self.ranking = None;
        self.cursor = 0;
    }

    fn exhaust(&mut self, reason: ExhaustedReason) {
        log::info!("session exhausted after {} turns: {reason:?}", self.history.len());
        self.state = SessionState::Exhausted { reason };
        self.ranking = None;
    }

    fn ensure_awaiting_guess(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::AwaitingGuess { .. } => Ok(()),
            SessionState::AwaitingFeedback { guess, .. } => {
                Err(SessionError::FeedbackPending(guess.to_string()))
            }
            SessionState::Won { .. } | SessionState::Exhausted { .. } => {
                Err(SessionError::Finished)
            }
        }
    }

    fn pending_guess(&self) -> Result<&'a Word, SessionError> {
        match self.state {
            SessionState::AwaitingFeedback { guess, .. } => Ok(guess),
            SessionState::AwaitingGuess { .. } => Err(SessionError::NoPendingGuess),
            SessionState::Won { .. } | SessionState::Exhausted { .. } => {
                Err(SessionError::Finished)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::WORDS;

    fn corpus(words: &[&str]) -> WordCorpus {
        words_from_slice(words).into_iter().collect()
    }

    /// Play suggestions against `answer` until the game ends
    fn play_out(session: &mut Session<'_>, answer: &Word) -> Outcome {
        loop {
            let Some(guess) = session.next_guess().unwrap() else {
                return Outcome::Exhausted {
                    reason: ExhaustedReason::NoCandidates,
                };
            };
            session.accept_guess().unwrap();
            let text = Feedback::compute(guess, answer).to_string();
            match session.submit_feedback(&text).unwrap() {
                Outcome::Continue { .. } => {}
                outcome => return outcome,
            }
        }
    }

    #[test]
    fn scenario_absent_letters_leave_only_moist() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let mut session = Session::new(&corpus);

        assert_eq!(session.next_guess().unwrap().map(Word::text), Some("crane"));
        session.accept_guess().unwrap();
        session.submit_feedback("_____").unwrap();

        let remaining: Vec<&str> = session.pool().words().iter().map(|w| w.text()).collect();
        assert_eq!(remaining, ["moist"]);
        assert_eq!(session.state(), &SessionState::AwaitingGuess { turn: 2 });
    }

    #[test]
    fn scenario_first_guess_win() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let mut session = Session::new(&corpus);

        session.next_guess().unwrap();
        session.accept_guess().unwrap();
        assert_eq!(session.turn(), 1);

        let outcome = session.submit_feedback("CRANE").unwrap();
        assert_eq!(outcome, Outcome::Won { turns: 1 });
        assert_eq!(session.state(), &SessionState::Won { turns: 1 });
        assert!(session.state().is_finished());
        assert_eq!(session.turn(), 1);
        assert_eq!(session.next_guess(), Err(SessionError::Finished));
    }

    #[test]
    fn scenario_turn_limit() {
        let corpus = corpus(&[
            "bills", "fills", "gills", "hills", "kills", "mills", "pills", "sills", "tills",
            "wills",
        ]);
        let answer = Word::new("jills").unwrap();
        let mut session = Session::new(&corpus);

        let outcome = play_out(&mut session, &answer);

        assert_eq!(
            outcome,
            Outcome::Exhausted {
                reason: ExhaustedReason::TurnLimit
            }
        );
        assert_eq!(session.history().len(), 6);
        assert_eq!(session.turn(), 6);
        assert_eq!(session.pool().len(), 4);
        assert_eq!(session.next_guess(), Ok(None));
    }

    #[test]
    fn scenario_exact_match_regression() {
        let corpus = corpus(&["crane", "stamp", "swamp"]);
        let mut session = Session::new(&corpus);

        session.guess_word("crane").unwrap();
        session.submit_feedback("__A__").unwrap();

        session.guess_word("swamp").unwrap();
        assert_eq!(
            session.submit_feedback("__a__"),
            Err(SessionError::Feedback(FeedbackError::ExactMatchRegression {
                position: 2,
                expected: 'a'
            }))
        );
        // Still waiting for valid feedback on the same guess
        assert!(matches!(
            session.state(),
            SessionState::AwaitingFeedback { turn: 2, .. }
        ));
    }

    #[test]
    fn scenario_pool_emptied_before_turn_limit() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let mut session = Session::new(&corpus);

        session.next_guess().unwrap();
        session.accept_guess().unwrap();
        // moist avoids the ruled-out letters but has no 'c'
        let outcome = session.submit_feedback("c____").unwrap();

        assert_eq!(
            outcome,
            Outcome::Exhausted {
                reason: ExhaustedReason::NoCandidates
            }
        );
        assert_eq!(session.next_guess(), Ok(None));
        assert!(session.turn() < 6);
    }

    #[test]
    fn rejecting_offers_next_ranked_word() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let mut session = Session::new(&corpus);

        let first = session.next_guess().unwrap().unwrap();
        let ranked: Vec<&Word> = session.ranking().unwrap().words().collect();
        assert_eq!(ranked[0], first);

        assert_eq!(session.reject_guess(), Ok(Some(ranked[1])));
        assert_eq!(session.accept_guess(), Ok(ranked[1]));
        assert!(matches!(
            session.state(),
            SessionState::AwaitingFeedback { turn: 1, guess } if *guess == ranked[1]
        ));
    }

    #[test]
    fn rejecting_everything_exhausts() {
        let corpus = corpus(&["crane", "moist"]);
        let mut session = Session::new(&corpus);

        session.next_guess().unwrap();
        assert!(session.reject_guess().unwrap().is_some());
        assert_eq!(session.reject_guess(), Ok(None));
        assert_eq!(
            session.state(),
            &SessionState::Exhausted {
                reason: ExhaustedReason::NoCandidates
            }
        );
    }

    #[test]
    fn api_misuse_is_reported() {
        let corpus = corpus(&["crane", "moist"]);
        let mut session = Session::new(&corpus);

        assert_eq!(session.accept_guess(), Err(SessionError::NoSuggestion));
        assert_eq!(
            session.submit_feedback("_____"),
            Err(SessionError::NoPendingGuess)
        );
        assert_eq!(
            session.guess_word("fuzzy"),
            Err(SessionError::UnknownWord("fuzzy".to_string()))
        );

        session.guess_word("crane").unwrap();
        assert_eq!(
            session.next_guess(),
            Err(SessionError::FeedbackPending("crane".to_string()))
        );
    }

    #[test]
    fn invalid_feedback_leaves_session_unchanged() {
        let corpus = corpus(&["crane", "slate", "adieu", "moist"]);
        let mut session = Session::new(&corpus);
        session.guess_word("crane").unwrap();

        for bad in ["", "____", "__x__", "__?__"] {
            assert!(session.validate_feedback(bad).is_err());
            assert!(session.submit_feedback(bad).is_err());
        }
        assert_eq!(session.pool().len(), 4);
        assert!(session.validate_feedback("__a_e").is_ok());
    }

    #[test]
    fn empty_corpus_reports_no_candidates() {
        let corpus = WordCorpus::default();
        let mut session = Session::new(&corpus);
        assert_eq!(session.next_guess(), Ok(None));
        assert!(session.state().is_finished());
    }

    #[test]
    fn weights_use_number_of_guess_being_chosen() {
        let corpus = corpus(&["crane", "slate"]);
        let session = Session::new(&corpus);
        assert_eq!(
            session.weights(),
            Weights {
                usefulness: 9,
                commonness: 1
            }
        );
    }

    #[test]
    fn pool_and_knowledge_are_monotonic() {
        let corpus: WordCorpus = words_from_slice(WORDS).into_iter().collect();
        let answer = corpus.get("mound").unwrap().clone();
        let mut session = Session::new(&corpus);

        let mut last_pool = session.pool().len();
        let mut last_available = session.constraints().available_letters();
        while let Some(guess) = session.next_guess().unwrap() {
            session.accept_guess().unwrap();
            let text = Feedback::compute(guess, &answer).to_string();
            let outcome = session.submit_feedback(&text).unwrap();

            assert!(session.pool().len() <= last_pool);
            assert!(session
                .constraints()
                .available_letters()
                .is_subset(last_available));
            last_pool = session.pool().len();
            last_available = session.constraints().available_letters();

            if !matches!(outcome, Outcome::Continue { .. }) {
                break;
            }
        }
    }

    #[test]
    fn generated_feedback_always_validates() {
        let corpus: WordCorpus = words_from_slice(WORDS).into_iter().collect();

        for answer in corpus.words().iter().step_by(7) {
            let mut session = Session::new(&corpus);
            let outcome = play_out(&mut session, answer);
            // The answer is never pruned, so the pool cannot run dry
            assert_ne!(
                outcome,
                Outcome::Exhausted {
                    reason: ExhaustedReason::NoCandidates
                },
                "ran out of candidates for {answer}"
            );
        }
    }

    #[test]
    fn same_inputs_give_same_suggestions() {
        let corpus: WordCorpus = words_from_slice(WORDS).into_iter().collect();
        let mut first = Session::new(&corpus);
        let mut second = Session::new(&corpus);
        first.next_guess().unwrap();
        second.next_guess().unwrap();
        assert_eq!(first.ranking(), second.ranking());
    }
}
