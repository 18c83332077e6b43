//! TUI rendering with ratatui
//!
//! Panels for the suggestion, the ranked candidates, the history and what
//! the feedback has revealed so far.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Cell, Feedback, WORD_LENGTH, Word};
use crate::output::formatters::{create_progress_bar, exact_pattern, letter_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const CANDIDATES_SHOWN: usize = 12;
const LIKELY_LETTERS_SHOWN: usize = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE GUESSER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Current guess info
            Constraint::Percentage(35), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = app.current_guess() else {
        let paragraph = Paragraph::new("No suggestion available").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let label = if app.manual_guess.is_some() {
        "Your word: "
    } else {
        "Suggested: "
    };
    let mut content = vec![Line::from(vec![
        Span::raw(label),
        Span::styled(
            guess.text().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let (Some(score), Some(ranking)) = (app.current_score(), app.session.ranking()) {
        let best_usefulness = ranking
            .entries()
            .iter()
            .map(|entry| entry.usefulness)
            .fold(0.0, f64::max);
        let weights = ranking.weights();

        content.extend([
            Line::from(format!(
                "Usefulness: [{}] {:.2} (#{} of {})",
                create_progress_bar(score.usefulness, best_usefulness, 18),
                score.usefulness,
                score.usefulness_rank + 1,
                ranking.len()
            )),
            Line::from(format!(
                "Commonness: {:.4} (#{})",
                score.commonness,
                score.commonness_rank + 1
            )),
            Line::from(format!("Score:      {:.2}", score.score)),
            Line::from(format!(
                "Weights:    usefulness {} / commonness {}",
                weights.usefulness, weights.commonness
            )),
        ]);
    } else {
        content.push(Line::from(Span::styled(
            "Not a possible answer",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let current = app.current_guess();

    let content: Vec<Line> = match app.session.ranking() {
        Some(ranking) => {
            let mut lines = vec![Line::from(format!(
                "{} candidates remaining",
                app.candidates_count()
            ))];
            lines.extend(ranking.entries().iter().take(CANDIDATES_SHOWN).map(|entry| {
                let (marker, style) = if Some(entry.word) == current {
                    ("▶ ", Style::default().fg(Color::Yellow))
                } else {
                    ("  ", Style::default().fg(Color::Green))
                };
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{:<5}", entry.word.text().to_uppercase()), style),
                    Span::styled(
                        format!(" {:>6.2}", entry.score),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            }));
            lines
        }
        None if app.session.state().is_finished() => vec![Line::from("Game over")],
        None => vec![Line::from(format!(
            "{} candidates remaining",
            app.candidates_count()
        ))],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

/// Letter tiles coloured like the game board
fn feedback_spans(guess: &Word, feedback: &Feedback) -> Vec<Span<'static>> {
    guess
        .chars()
        .iter()
        .zip(feedback.cells())
        .map(|(&letter, &cell)| {
            let background = match cell {
                Cell::Absent => Color::DarkGray,
                Cell::Misplaced(_) => Color::Yellow,
                Cell::Exact(_) => Color::Green,
            };
            Span::styled(
                format!(" {} ", letter.to_ascii_uppercase() as char),
                Style::default()
                    .fg(Color::Black)
                    .bg(background)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(feedback_spans(record.guess, &record.feedback));
            spans.push(Span::raw(format!(
                "  {} → {}",
                record.candidates_before, record.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(60), // Knowledge
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_knowledge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.corpus.len();
    let remaining = app.candidates_count();
    let progress_pct = if total == 0 {
        0
    } else {
        ((total - remaining) * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{remaining} of {total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_knowledge(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.session.constraints();
    let excluded = constraints.excluded_letters(app.corpus.letters());

    let misplaced: Vec<String> = constraints
        .partial_matches()
        .iter()
        .enumerate()
        .filter(|(_, letters)| !letters.is_empty())
        .map(|(position, letters)| format!("{}:{}", position + 1, letters))
        .collect();

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Pattern:  "),
            Span::styled(
                exact_pattern(constraints.exact_matches()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Present:  "),
            Span::styled(
                letter_list(constraints.correct_letters().iter().copied()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(format!(
            "Not at:   {}",
            if misplaced.is_empty() {
                "-".to_string()
            } else {
                misplaced.join(" ")
            }
        )),
        Line::from(vec![
            Span::raw("Excluded: "),
            Span::styled(
                letter_list(excluded.iter()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Likely letters",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let stats = app.session.statistics();
    for position in 0..WORD_LENGTH {
        let likely: Vec<String> = stats
            .likely_letters(position)
            .iter()
            .filter(|&&letter| stats.uses(letter, position) > 0)
            .take(LIKELY_LETTERS_SHOWN)
            .map(|&letter| {
                format!(
                    "{} {:>3}",
                    letter.to_ascii_uppercase() as char,
                    stats.uses(letter, position)
                )
            })
            .collect();
        lines.push(Line::from(format!("{}: {}", position + 1, likely.join("  "))));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" What We Know ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let feedback_title = app.current_guess().map_or_else(
        || " Enter Feedback ".to_string(),
        |guess| {
            format!(
                " Feedback for {} (UPPER=exact lower=misplaced _=absent) | TAB for manual word ",
                guess.text().to_uppercase()
            )
        },
    );

    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 'n' new game, 'u' undo, 'q' quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Feedback => (feedback_title, app.input_buffer.as_str(), Color::Yellow),
        InputMode::ManualWord => (
            " Enter Word to Try (5 letters) | ESC to cancel ".to_string(),
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = format!("Guess #{}", app.session.turn() + 1);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game | u: Undo",
        InputMode::Feedback => "Esc: Quit | ^R: Next | ^U: Undo | ^N: New | TAB: Manual",
        InputMode::ManualWord => "Enter: Use word | Esc: Cancel",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordCorpus;
    use crate::guesser::GuesserConfig;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_suggestion_and_history() {
        let corpus: WordCorpus = words_from_slice(&["crane", "slate", "adieu", "moist"])
            .into_iter()
            .collect();
        let mut app = App::new(&corpus, GuesserConfig::default());
        app.compute_suggestion();
        app.handle_feedback("_____");

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("WORDLE GUESSER"));
        assert!(text.contains("MOIST"));
        assert!(text.contains("Excluded"));
    }

    #[test]
    fn feedback_tiles_follow_cells() {
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::parse("__A_e").unwrap();
        let spans = feedback_spans(&guess, &feedback);

        assert_eq!(spans.len(), WORD_LENGTH);
        assert_eq!(spans[2].style.bg, Some(Color::Green));
        assert_eq!(spans[4].style.bg, Some(Color::Yellow));
        assert_eq!(spans[0].style.bg, Some(Color::DarkGray));
    }
}
