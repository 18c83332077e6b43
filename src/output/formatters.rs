//! Formatting utilities for terminal output

use crate::core::{Cell, Feedback, Word};
use colored::{ColoredString, Colorize};

/// One guess row with each letter coloured by its feedback
///
/// Absent letters are grey, partial matches yellow and exact matches bold green.
#[must_use]
pub fn colored_feedback(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.cells())
        .map(|(&letter, &cell)| colored_cell(letter, cell).to_string())
        .collect()
}

fn colored_cell(letter: u8, cell: Cell) -> ColoredString {
    let text = (letter.to_ascii_uppercase() as char).to_string();
    match cell {
        Cell::Absent => text.bright_black(),
        Cell::Misplaced(_) => text.yellow(),
        Cell::Exact(_) => text.green().bold(),
    }
}

/// Known positions as a pattern like `_ _ A _ E`
#[must_use]
pub fn exact_pattern(exact: &[Option<u8>]) -> String {
    exact
        .iter()
        .map(|slot| slot.map_or('_', |letter| letter.to_ascii_uppercase() as char))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters as an uppercase, comma separated list
#[must_use]
pub fn letter_list(letters: impl IntoIterator<Item = u8>) -> String {
    let list: Vec<String> = letters
        .into_iter()
        .map(|letter| (letter.to_ascii_uppercase() as char).to_string())
        .collect();
    if list.is_empty() {
        "-".to_string()
    } else {
        list.join(", ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width]
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
