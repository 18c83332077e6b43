//! Simple interactive CLI mode
//!
//! Text-based prompt loop without the TUI: offer a guess, confirm it, read
//! the game's feedback and show the tally so far.

use crate::core::{Word, WordCorpus};
use crate::guesser::{GuesserConfig, Session, SessionError, SessionState};
use crate::output::formatters::colored_feedback;
use anyhow::Result;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Candidates are listed once the pool is this small
const SHOW_CANDIDATES: usize = 10;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(corpus: &WordCorpus, config: GuesserConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = Prompt {
        input: stdin.lock(),
        output: stdout.lock(),
    };
    play(&mut prompt, corpus, config)
}

struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Ask for a line; `None` once input is closed
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Undo,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" => Some(Self::NewGame),
            "undo" | "u" => Some(Self::Undo),
            _ => None,
        }
    }
}

/// What a prompt step ended with
enum Step {
    Done,
    Command(Command),
}

/// How a game ended
enum GameEnd {
    Over,
    Restart,
    Quit,
}

fn play<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    corpus: &WordCorpus,
    config: GuesserConfig,
) -> Result<()> {
    prompt.say("\n╔══════════════════════════════════════════════════════════════╗")?;
    prompt.say("║                 Wordle Guesser - Simple Mode                 ║")?;
    prompt.say("╚══════════════════════════════════════════════════════════════╝\n")?;
    prompt.say("I'll suggest a guess each turn. Type the game's result for it:\n")?;
    prompt.say("  - UPPERCASE letter: right letter, right spot")?;
    prompt.say("  - lowercase letter: right letter, wrong spot")?;
    prompt.say("  - _ or -:           letter not in the word")?;
    prompt.say("  e.g. guessing CRANE against SLATE gives __A_E\n")?;
    prompt.say("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;

    if prompt.ask("Press Enter to start")?.is_some() {
        loop {
            let again = match play_game(prompt, corpus, config)? {
                GameEnd::Quit => false,
                GameEnd::Restart => true,
                GameEnd::Over => prompt
                    .ask("Play again? (y/N)")?
                    .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")),
            };
            if !again {
                break;
            }
            prompt.say("\nNew game started!\n")?;
        }
    }

    prompt.say("Thanks for playing.")?;
    Ok(())
}

fn play_game<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    corpus: &WordCorpus,
    config: GuesserConfig,
) -> Result<GameEnd> {
    let mut session = Session::with_config(corpus, config);
    let mut snapshots: Vec<Session<'_>> = Vec::new();

    loop {
        let step = match session.state().clone() {
            SessionState::Won { turns } => {
                prompt.say(format!("\n{}\n", format!("Got it in {turns}!").green().bold()))?;
                return Ok(GameEnd::Over);
            }
            SessionState::Exhausted { reason } => {
                log::debug!("game over: {reason:?}");
                prompt.say(format!("\n{}\n", "No more words to guess.".red()))?;
                return Ok(GameEnd::Over);
            }
            SessionState::AwaitingGuess { turn } => {
                let snapshot = session.clone();
                let step = offer_guess(prompt, &mut session, turn)?;
                if matches!(session.state(), SessionState::AwaitingFeedback { .. }) {
                    snapshots.push(snapshot);
                }
                step
            }
            SessionState::AwaitingFeedback { guess, .. } => {
                let step = read_feedback(prompt, &mut session, guess)?;
                if matches!(step, Step::Done) {
                    print_tally(prompt, &session)?;
                }
                step
            }
        };

        match step {
            Step::Done => {}
            Step::Command(Command::Quit) => return Ok(GameEnd::Quit),
            Step::Command(Command::NewGame) => return Ok(GameEnd::Restart),
            Step::Command(Command::Undo) => {
                if let Some(previous) = snapshots.pop() {
                    session = previous;
                    prompt.say(format!("Undone! Back to guess #{}\n", session.turn() + 1))?;
                } else {
                    prompt.say("Nothing to undo!\n")?;
                }
            }
        }
    }
}

/// Offer ranked guesses until one is accepted or none are left
fn offer_guess<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session<'_>,
    turn: usize,
) -> Result<Step> {
    let Some(mut guess) = session.next_guess()? else {
        return Ok(Step::Done);
    };

    let remaining = session.pool().len();
    prompt.say("────────────────────────────────────────────────────────────")?;
    prompt.say(format!("Turn {turn}: {remaining} candidates remaining"))?;
    if remaining <= SHOW_CANDIDATES {
        let list: Vec<String> = session
            .pool()
            .words()
            .iter()
            .map(|word| word.text().to_uppercase())
            .collect();
        prompt.say(format!("  {}", list.join(", ")))?;
    }

    loop {
        if let Some(entry) = session.suggestion() {
            prompt.say(format!(
                "  usefulness {:.2} | commonness {:.4} | score {:.2}",
                entry.usefulness, entry.commonness, entry.score
            ))?;
        }

        let question = format!(
            "Guess #{turn}: Would you like to guess {}? (Y/n)",
            guess.text().to_uppercase().bold()
        );
        let Some(answer) = prompt.ask(&question)? else {
            return Ok(Step::Command(Command::Quit));
        };
        if let Some(command) = Command::parse(&answer) {
            return Ok(Step::Command(command));
        }

        if matches!(answer.to_lowercase().as_str(), "n" | "no") {
            match session.reject_guess()? {
                Some(next) => guess = next,
                None => return Ok(Step::Done),
            }
        } else {
            session.accept_guess()?;
            return Ok(Step::Done);
        }
    }
}

/// Read feedback for `guess`, asking again until it is accepted
fn read_feedback<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session<'_>,
    guess: &Word,
) -> Result<Step> {
    loop {
        let question = format!("Result for {}", guess.text().to_uppercase());
        let Some(text) = prompt.ask(&question)? else {
            return Ok(Step::Command(Command::Quit));
        };
        if let Some(command) = Command::parse(&text) {
            return Ok(Step::Command(command));
        }

        match session.submit_feedback(&text) {
            Ok(_) => return Ok(Step::Done),
            Err(SessionError::Feedback(err)) => {
                prompt.say(err.to_string().red())?;
                prompt.say("Please re-enter result")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn print_tally<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &Session<'_>,
) -> Result<()> {
    prompt.say("")?;
    for record in session.history() {
        prompt.say(format!("  {}", colored_feedback(record.guess, &record.feedback)))?;
    }
    prompt.say("")?;
    Ok(())
}
