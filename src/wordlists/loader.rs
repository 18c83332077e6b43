//! Word list loading utilities
//!
//! Lists on disk are either plain text (one word per line, `#` comments) or a
//! JSON array of strings. Either way the order is kept: most common first.

use crate::core::{Word, WordCorpus};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error loading a word list from disk
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("cannot read word list: {0}")]
    Io(#[from] io::Error),
    #[error("word list is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load words from a file
///
/// Files ending in `.json` are parsed as a JSON array; anything else is read
/// line by line. Invalid entries are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if a `.json` file is not
/// an array of strings.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        words_from_json(&content)?
    } else {
        words_from_text(&content)
    };

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a file straight into a corpus
///
/// # Errors
///
/// Same as [`load_from_file`].
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<WordCorpus, WordListError> {
    Ok(load_from_file(path)?.into_iter().collect())
}

/// Parse a plain text list, skipping blank lines, comments and invalid words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed)
                    .inspect_err(|e| log::debug!("skipping '{trimmed}': {e}"))
                    .ok()
            }
        })
        .collect()
}

/// Parse a JSON array of strings, skipping invalid words
///
/// # Errors
///
/// Returns an error if `content` is not a JSON array of strings.
pub fn words_from_json(content: &str) -> Result<Vec<Word>, serde_json::Error> {
    let entries: Vec<String> = serde_json::from_str(content)?;
    Ok(entries
        .iter()
        .filter_map(|entry| Word::new(entry.trim()).ok())
        .collect())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::loader::words_from_slice;
/// use wordle_guesser::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(texts(&words), ["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn text_skips_comments_and_blanks() {
        let content = "# most common first\ncrane\n\n  Slate  \nbad\nmoist\n";
        assert_eq!(texts(&words_from_text(content)), ["crane", "slate", "moist"]);
    }

    #[test]
    fn json_array_keeps_order() {
        let words = words_from_json(r#"["moist", "crane", "x", "ADIEU"]"#).unwrap();
        assert_eq!(texts(&words), ["moist", "crane", "adieu"]);
    }

    #[test]
    fn json_rejects_non_array() {
        assert!(words_from_json(r#"{"words": ["crane"]}"#).is_err());
        assert!(words_from_json("crane").is_err());
    }

    #[test]
    fn load_from_files_on_disk() {
        let dir = std::env::temp_dir();
        let text_path = dir.join(format!("wordle_guesser_{}.txt", std::process::id()));
        let json_path = dir.join(format!("wordle_guesser_{}.json", std::process::id()));
        fs::write(&text_path, "crane\nslate\n").unwrap();
        fs::write(&json_path, r#"["slate","crane"]"#).unwrap();

        let from_text = load_corpus(&text_path).unwrap();
        let from_json = load_corpus(&json_path).unwrap();
        fs::remove_file(&text_path).unwrap();
        fs::remove_file(&json_path).unwrap();

        assert_eq!(from_text.words()[0].text(), "crane");
        assert_eq!(from_json.words()[0].text(), "slate");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_from_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(WordListError::Io(_))));
    }
}
