//! TUI application state and logic

use crate::core::{Word, WordCorpus};
use crate::guesser::{GuesserConfig, Outcome, ScoredWord, Session, SessionState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub corpus: &'a WordCorpus,
    pub config: GuesserConfig,
    pub session: Session<'a>,
    /// Word entered with Tab, played instead of the suggestion
    pub manual_guess: Option<&'a Word>,
    pub input_buffer: String,
    pub manual_word: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Session and stats before each accepted turn
    pub undo_stack: Vec<(Session<'a>, Statistics)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus, config: GuesserConfig) -> Self {
        Self {
            corpus,
            config,
            session: Session::with_config(corpus, config),
            manual_guess: None,
            input_buffer: String::new(),
            manual_word: String::new(),
            messages: vec![
                Message {
                    text: format!("Welcome! Guessing from {} words.", corpus.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type the result: UPPER = exact, lower = misplaced, _ = absent"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            undo_stack: Vec::new(),
        }
    }

    /// Rank the pool for the next guess
    pub fn compute_suggestion(&mut self) {
        if !matches!(self.session.state(), SessionState::AwaitingGuess { .. }) {
            return;
        }

        match self.session.next_guess() {
            Ok(Some(_)) => {}
            Ok(None) => self.game_over(),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// The word the next feedback is for
    #[must_use]
    pub fn current_guess(&self) -> Option<&'a Word> {
        self.manual_guess
            .or_else(|| self.session.suggestion().map(|entry| entry.word))
    }

    /// Ranking metrics for the current guess, if it is a candidate
    #[must_use]
    pub fn current_score(&self) -> Option<&ScoredWord<'a>> {
        let guess = self.current_guess()?;
        self.session.ranking()?.find(guess)
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.pool().len()
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let snapshot = (self.session.clone(), self.stats.clone());

        let played = match self.manual_guess {
            Some(word) => self.session.guess_word(word.text()),
            None => self.session.accept_guess(),
        };
        let guess = match played {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.session.submit_feedback(feedback) {
            Err(e) => {
                // Back to offering the same guess
                self.session = snapshot.0;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Ok(outcome) => {
                self.undo_stack.push(snapshot);
                self.manual_guess = None;
                self.input_buffer.clear();

                match outcome {
                    Outcome::Continue { remaining } => {
                        self.add_message(
                            &format!(
                                "{}: {remaining} candidates remaining",
                                guess.text().to_uppercase()
                            ),
                            MessageStyle::Info,
                        );
                        self.compute_suggestion();
                    }
                    Outcome::Won { turns } => self.record_win(turns),
                    Outcome::Exhausted { .. } => self.game_over(),
                }
            }
        }
    }

    fn record_win(&mut self, turns: usize) {
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        if let Some(slot) = self.stats.guess_distribution.get_mut(turns) {
            *slot += 1;
        }

        let celebration = match turns {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
            3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
            _ => format!("🎉 Got it in {turns}! 🎉"),
        };
        self.input_mode = InputMode::GameOver;
        self.add_message(&celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn game_over(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        self.add_message("No more words to guess.", MessageStyle::Error);
        self.add_message(
            "Press 'u' to undo, 'n' for new game or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    /// Skip the suggestion on offer, or drop a manual word
    pub fn reject_suggestion(&mut self) {
        if self.manual_guess.take().is_some() {
            self.add_message("Back to suggestions", MessageStyle::Info);
            return;
        }

        match self.session.reject_guess() {
            Ok(Some(next)) => self.add_message(
                &format!("Next suggestion: {}", next.text().to_uppercase()),
                MessageStyle::Info,
            ),
            Ok(None) => self.game_over(),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session = Session::with_config(self.corpus, self.config);
        self.manual_guess = None;
        self.undo_stack.clear();
        self.input_buffer.clear();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some((session, stats)) = self.undo_stack.pop() {
            self.session = session;
            self.stats = stats;
            self.manual_guess = None;
            self.input_buffer.clear();
            self.input_mode = InputMode::Feedback;
            self.compute_suggestion();
            self.add_message(
                &format!("Undone! Back to guess #{}", self.session.turn() + 1),
                MessageStyle::Info,
            );
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn use_manual_word(&mut self) {
        let text = self.manual_word.clone();

        let Some(word) = self.corpus.get(&text) else {
            self.add_message(
                &format!("Word '{}' not in word list!", text.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        };

        if self.session.pool().contains(word) {
            let chosen = self.session.ranking().and_then(|ranking| ranking.find(word));
            let note = match (chosen, self.session.suggestion()) {
                (Some(chosen), Some(best)) if chosen.score < best.score => Some(format!(
                    "Note: {} scores {:.2} ({:.2} more)",
                    best.word.text().to_uppercase(),
                    best.score,
                    best.score - chosen.score
                )),
                _ => None,
            };
            if let Some(note) = note {
                self.add_message(&note, MessageStyle::Info);
            }
        } else {
            self.add_message(
                &format!("{} cannot be the answer", word.text().to_uppercase()),
                MessageStyle::Info,
            );
        }

        self.manual_guess = Some(word);
        self.add_message(
            &format!("Using: {}", word.text().to_uppercase()),
            MessageStyle::Success,
        );
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') if ctrl => self.reject_suggestion(),
                KeyCode::Char('u') if ctrl => self.undo_last(),
                KeyCode::Char('n') if ctrl => self.new_game(),
                KeyCode::Down => self.reject_suggestion(),
                KeyCode::Tab => {
                    self.input_mode = InputMode::ManualWord;
                    self.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                }
                KeyCode::Char(c) if !ctrl => {
                    if self.input_buffer.chars().count() < 5
                        && (c.is_ascii_alphabetic() || c == '_' || c == '-')
                    {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                    self.add_message("Cancelled manual word entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) if !ctrl => {
                    if self.manual_word.len() < 5 && c.is_ascii_alphabetic() {
                        self.manual_word.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => {
                    if self.manual_word.len() == 5 {
                        self.use_manual_word();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn corpus(words: &[&str]) -> WordCorpus {
        words_from_slice(words).into_iter().collect()
    }

    fn started(corpus: &WordCorpus) -> App<'_> {
        let mut app = App::new(corpus, GuesserConfig::default());
        app.compute_suggestion();
        app
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<'_>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    const WORDS: &[&str] = &["crane", "slate", "adieu", "moist"];

    #[test]
    fn first_suggestion_is_offered() {
        let corpus = corpus(WORDS);
        let app = started(&corpus);

        assert_eq!(app.current_guess().map(Word::text), Some("crane"));
        assert!(app.current_score().is_some());
        assert_eq!(app.candidates_count(), 4);
    }

    #[test]
    fn feedback_advances_and_wins() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);

        type_text(&mut app, "_____");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_guess().map(Word::text), Some("moist"));
        assert!(app.input_buffer.is_empty());

        type_text(&mut app, "MOIST");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
    }

    #[test]
    fn invalid_feedback_keeps_the_guess() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);

        app.handle_feedback("abc");
        assert_eq!(app.current_guess().map(Word::text), Some("crane"));
        assert!(app.session.history().is_empty());
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));

        app.handle_feedback("_____");
        assert_eq!(app.session.history().len(), 1);
    }

    #[test]
    fn reject_offers_next_suggestion() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);

        ctrl(&mut app, 'r');
        let next = app.current_guess().map(Word::text);
        assert!(next.is_some());
        assert_ne!(next, Some("crane"));
    }

    #[test]
    fn undo_restores_previous_turn() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);

        app.handle_feedback("_____");
        ctrl(&mut app, 'u');

        assert!(app.session.history().is_empty());
        assert_eq!(app.candidates_count(), 4);
        assert_eq!(app.current_guess().map(Word::text), Some("crane"));
    }

    #[test]
    fn undo_after_win_forgets_the_game() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);

        app.handle_feedback("CRANE");
        assert_eq!(app.stats.total_games, 1);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.stats, Statistics::default());
        assert_eq!(app.input_mode, InputMode::Feedback);
    }

    #[test]
    fn manual_word_is_played() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "adieu");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_guess().map(Word::text), Some("adieu"));

        app.handle_feedback("__I__");
        assert_eq!(app.session.history()[0].guess.text(), "adieu");
        assert_eq!(app.current_guess().map(Word::text), Some("moist"));
    }

    #[test]
    fn unknown_manual_word_is_refused() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "zebra");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::ManualWord);
        assert_eq!(app.current_guess().map(Word::text), Some("crane"));
    }

    #[test]
    fn rejecting_everything_ends_the_game() {
        let corpus = corpus(&["crane", "slate"]);
        let mut app = started(&corpus);

        ctrl(&mut app, 'r');
        ctrl(&mut app, 'r');
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn new_game_resets_session() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);

        app.handle_feedback("_____");
        ctrl(&mut app, 'n');

        assert!(app.session.history().is_empty());
        assert!(app.undo_stack.is_empty());
        assert_eq!(app.current_guess().map(Word::text), Some("crane"));
    }

    #[test]
    fn input_is_limited_to_feedback_characters() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);

        type_text(&mut app, "a1_-Bxyz");
        assert_eq!(app.input_buffer, "a_-Bx");
    }

    #[test]
    fn quit_keys() {
        let corpus = corpus(WORDS);
        let mut app = started(&corpus);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = started(&corpus);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
