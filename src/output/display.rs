//! Display functions for command results

use super::formatters::{colored_feedback, create_progress_bar};
use crate::commands::{BenchmarkResult, OpeningGuess, SolveResult, StatsResult};
use colored::Colorize;

/// Failures listed before the rest are summarised
const FAILURES_SHOWN: usize = 20;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}  {}",
            i + 1,
            colored_feedback(&step.word, &step.feedback),
            step.feedback,
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Feedback:   {} exact, {} misplaced",
                step.feedback.count_exact(),
                step.feedback.count_misplaced()
            );
            println!(
                "  Weights:    usefulness {} / commonness {}",
                step.weights.usefulness, step.weights.commonness
            );
            if let Some(score) = step.score {
                println!(
                    "  Metrics:    usefulness {:.2}, commonness {:.4}, score {:.2}",
                    score.usefulness, score.commonness, score.score
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print corpus statistics
pub fn print_stats_result(result: &StatsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} words ",
        "CORPUS STATISTICS:".bright_cyan().bold(),
        result.total_words.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔤 {}", "Likely letters by position:".bright_cyan().bold());
    for (position, letters) in result.likely_letters.iter().enumerate() {
        let top = letters.first().map_or(0, |&(_, uses)| uses);
        let row: Vec<String> = letters
            .iter()
            .map(|&(letter, uses)| {
                format!(
                    "{} {:>4} {}",
                    (letter.to_ascii_uppercase() as char).to_string().bold(),
                    uses,
                    create_progress_bar(f64::from(uses), f64::from(top), 6).green()
                )
            })
            .collect();
        println!("   {}: {}", position + 1, row.join("  "));
    }

    println!(
        "\n📊 {} (weights: usefulness {} / commonness {})",
        "Best opening guesses".bright_cyan().bold(),
        result.weights.usefulness,
        result.weights.commonness
    );
    for guess in &result.top {
        print_opening_guess(guess);
    }

    if let Some(focus) = &result.focus {
        println!("   {}", "...".bright_black());
        print_opening_guess(focus);
    }
}

fn print_opening_guess(guess: &OpeningGuess) {
    println!(
        "   {:>4}. {}  usefulness {:>7.2}  commonness {:.4}  score {}",
        guess.rank,
        guess.word.to_uppercase().bright_white().bold(),
        guess.usefulness,
        guess.commonness,
        format!("{:.2}", guess.score).bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({})",
        result.solved,
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} ({}):",
            "Not solved".red().bold(),
            result.failures.len()
        );
        let shown: Vec<String> = result
            .failures
            .iter()
            .take(FAILURES_SHOWN)
            .map(|word| word.to_uppercase())
            .collect();
        println!("   {}", shown.join(", "));
        if result.failures.len() > FAILURES_SHOWN {
            println!(
                "   {}",
                format!("... and {} more", result.failures.len() - FAILURES_SHOWN).bright_black()
            );
        }
    }
}
