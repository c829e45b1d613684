//! Wordle Assist - CLI
//!
//! Wordle helper with TUI and CLI modes: narrows candidates from tile
//! feedback and ranks what to play next.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use wordle_assist::{
    commands::{
        GuessInput, letter_stats, print_test_all_statistics, random_target, run_filler,
        run_simple, run_test_all, solve_word, suggest,
    },
    output::{
        print_filler_result, print_solve_result, print_stats_report, print_suggest_result,
    },
    solver::SessionConfig,
    wordlists::{WordCorpus, answers_corpus, embedded_corpus, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle helper: narrows candidates from tile feedback and ranks next guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, every allowed guess), 'answers' (answer words only),
    /// or path to a CSV/text file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Guess budget per game (0 = unlimited)
    #[arg(long, global = true, default_value = "6")]
    max_guesses: usize,

    /// Accept guesses that are not in the word list
    #[arg(long, global = true)]
    allow_unknown: bool,

    /// Keep the empty candidate set instead of restarting after a contradiction
    #[arg(long, global = true)]
    no_auto_reset: bool,

    /// Rank an evenly spaced sample when more candidates than this remain
    #[arg(long, global = true)]
    max_ranked: Option<usize>,
}

impl Cli {
    const fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_guesses: self.max_guesses,
            require_dictionary_word: !self.allow_unknown,
            auto_reset: !self.no_auto_reset,
            max_ranked: self.max_ranked,
        }
    }
}

#[derive(Args)]
struct GuessArgs {
    /// Guess and feedback as WORD:MARKS, e.g. crane:01200 or crane:-YG--
    #[arg(short, long = "guess", value_name = "WORD:MARKS")]
    guesses: Vec<GuessInput>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based prompts without TUI)
    Simple,

    /// Apply guesses and print ranked suggestions
    Suggest {
        #[command(flatten)]
        guesses: GuessArgs,

        /// Number of suggestions to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Show every remaining candidate
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Apply guesses and print letter statistics for what remains
    Stats {
        #[command(flatten)]
        guesses: GuessArgs,
    },

    /// Find words spelled only from the given letters
    Filler {
        /// One to five distinct letters
        letters: String,
    },

    /// Simulate a game against a hidden word
    Solve {
        /// The hidden word (random word from the list when omitted)
        word: Option<String>,

        /// Show candidate counts and scores per step
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate every word in the list
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the corpus selected by the -w flag
fn load_corpus(wordlist: &str) -> Result<WordCorpus> {
    match wordlist {
        "all" => Ok(embedded_corpus()),
        "answers" => Ok(answers_corpus()),
        path => load_from_file(path).with_context(|| format!("Failed to load word list {path}")),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist)?;
    let config = cli.session_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&corpus, config),
        Commands::Simple => run_simple(&corpus, config),
        Commands::Suggest {
            guesses,
            limit,
            all,
        } => {
            let limit = if all { usize::MAX } else { limit };
            let result = suggest(&corpus, config, &guesses.guesses, limit)?;
            print_suggest_result(&result);
            Ok(())
        }
        Commands::Stats { guesses } => {
            let report = letter_stats(&corpus, config, &guesses.guesses)?;
            print_stats_report(&report);
            Ok(())
        }
        Commands::Filler { letters } => {
            let result = run_filler(&corpus, &letters)?;
            print_filler_result(&result);
            Ok(())
        }
        Commands::Solve { word, verbose } => run_solve_command(&corpus, config, word, verbose),
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Wordle Assist Self-Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} words\n", corpus.len());

            let stats = run_test_all(&corpus, config, limit)?;
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

fn run_solve_command(
    corpus: &WordCorpus,
    config: SessionConfig,
    word: Option<String>,
    verbose: bool,
) -> Result<()> {
    let target = match word {
        Some(word) => word,
        None => random_target(corpus)
            .context("Word list is empty")?
            .text()
            .to_string(),
    };

    let result = solve_word(corpus, config, &target)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_play_command(corpus: &WordCorpus, config: SessionConfig) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(corpus, config);
    run_tui(app)
}
