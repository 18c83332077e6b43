//! Wordle Guesser - CLI
//!
//! Suggests guesses from a frequency-ordered word list, with TUI and plain
//! prompt modes plus offline solve, stats and benchmark commands.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use wordle_guesser::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_corpus, run_benchmark, run_simple, select_targets,
        solve_word,
    },
    core::{Word, WordCorpus},
    guesser::GuesserConfig,
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_solve_result, print_stats_result},
    wordlists::{embedded_corpus, loader::load_corpus},
};

#[derive(Parser)]
#[command(
    name = "wordle_guesser",
    about = "Wordle guesser ranking guesses by letter usefulness and word commonness",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or a path to a text or .json file, most common word first
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Bonus added to the usefulness rank when scoring guesses
    #[arg(long, global = true, default_value_t = GuesserConfig::DEFAULT_RANK_BONUS)]
    rank_bonus: f64,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (prompt loop without TUI)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts, weights and scores per guess
        #[arg(short = 'd', long)]
        details: bool,

        /// Override first word
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Letter statistics and the best opening guesses
    Stats {
        /// Number of opening guesses to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Also show where this word ranks
        #[arg(long)]
        word: Option<String>,
    },

    /// Benchmark guesser performance
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test every word in the list instead of a sample
        #[arg(short, long)]
        all: bool,

        /// Seed for picking the sample
        #[arg(short, long)]
        seed: Option<u64>,

        /// Override first word
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the corpus selected with -w
fn load_wordlist(wordlist: &str) -> Result<WordCorpus> {
    let corpus = match wordlist {
        "embedded" => embedded_corpus(),
        path => load_corpus(path).with_context(|| format!("failed to load word list '{path}'"))?,
    };

    if corpus.is_empty() {
        bail!("word list '{wordlist}' has no valid five-letter words");
    }
    log::info!("using {} words", corpus.len());
    Ok(corpus)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let corpus = load_wordlist(&cli.wordlist)?;
    let config = GuesserConfig::new().with_rank_bonus(cli.rank_bonus);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(&corpus, config)),
        Commands::Simple => run_simple(&corpus, config),
        Commands::Solve {
            word,
            details,
            first_word,
        } => run_solve_command(&corpus, config, word, details, first_word),
        Commands::Stats { top, word } => {
            let result = analyze_corpus(&corpus, top, word.as_deref(), config)?;
            print_stats_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            all,
            seed,
            first_word,
        } => run_benchmark_command(&corpus, config, count, all, seed, first_word),
    }
}

fn run_solve_command(
    corpus: &WordCorpus,
    config: GuesserConfig,
    word: String,
    details: bool,
    first_word: Option<String>,
) -> Result<()> {
    let first_word = first_word.map(|w| checked_first_word(corpus, &w)).transpose()?;
    let solve_config = SolveConfig {
        guesser: config,
        first_word,
        ..SolveConfig::new(word)
    };

    let result = solve_word(&solve_config, corpus)?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_benchmark_command(
    corpus: &WordCorpus,
    config: GuesserConfig,
    count: usize,
    all: bool,
    seed: Option<u64>,
    first_word: Option<String>,
) -> Result<()> {
    let first_word = first_word.map(|w| checked_first_word(corpus, &w)).transpose()?;

    let targets: Vec<&Word> = if all {
        println!("Running benchmark on all {} words...", corpus.len());
        corpus.words().iter().collect()
    } else {
        let seed = seed.unwrap_or_else(rand::random);
        println!("Running benchmark on {count} random words (seed {seed})...");
        select_targets(corpus, count, seed)
    };
    if let Some(word) = &first_word {
        println!("Forced first word: {}", word.to_uppercase());
    }

    let benchmark_config = BenchmarkConfig {
        guesser: config,
        first_word,
        show_progress: true,
    };
    let result = run_benchmark(corpus, &targets, &benchmark_config)?;
    print_benchmark_result(&result);
    Ok(())
}

/// Normalise a forced first word and make sure it can be played
fn checked_first_word(corpus: &WordCorpus, text: &str) -> Result<String> {
    let word = Word::new(text.trim()).with_context(|| format!("invalid first word '{text}'"))?;
    if !corpus.contains(&word) {
        bail!("first word '{word}' is not in the word list");
    }
    Ok(word.to_string())
}
