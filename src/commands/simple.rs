//! Simple interactive CLI mode
//!
//! Line-based helper loop without the TUI: enter the word you played and
//! the tile values the game showed, get the narrowed list back.

use crate::core::Feedback;
use crate::output::formatters::{format_word_list, letter};
use crate::solver::{GuessOutcome, Session, SessionConfig, SessionError};
use crate::wordlists::WordCorpus;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Longest candidate list printed in full
const MAX_LISTED_WORDS: usize = 50;

/// Letters shown in the occurrence summary
const TOP_LETTERS: usize = 10;

/// One line typed at the word prompt
///
/// Commands start with ':' so that any five-letter word, `reset`
/// included, can still be entered as a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Blank,
    Quit,
    Reset,
    Filler(String),
    Guess(String),
}

fn parse_line(line: &str) -> Line {
    let lowered = line.trim().to_lowercase();
    let Some(command) = lowered.strip_prefix(':') else {
        if lowered.is_empty() {
            return Line::Blank;
        }
        if matches!(lowered.as_str(), "quit" | "exit") {
            return Line::Quit;
        }
        return Line::Guess(lowered);
    };

    match command.split_whitespace().collect::<Vec<_>>().as_slice() {
        ["quit" | "q" | "exit"] => Line::Quit,
        ["reset" | "new"] => Line::Reset,
        ["filler", letters @ ..] => Line::Filler(letters.concat()),
        _ => Line::Guess(lowered.clone()),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(corpus: &WordCorpus, config: SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(corpus, config, &mut stdin.lock())
}

/// Run the loop against any line source
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead>(
    corpus: &WordCorpus,
    config: SessionConfig,
    input: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Assist - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Total words fetched: {}", corpus.len());
    println!("After each guess, enter the word and its position values:\n");
    println!("  - 0 (or -) for gray: letter not in the word");
    println!("  - 1 (or Y) for yellow: letter elsewhere in the word");
    println!("  - 2 (or G) for green: letter in this position\n");
    println!("Commands: ':filler <letters>', ':reset', ':quit'\n");

    let mut session = Session::new(corpus, config);

    loop {
        let Some(line) = get_user_input(input, "Enter your word")? else {
            break;
        };
        let guess = match parse_line(&line) {
            Line::Blank => continue,
            Line::Quit => break,
            Line::Reset => {
                session.reset();
                println!("\n🔄 Reset to {} words\n", session.candidate_count());
                continue;
            }
            Line::Filler(letters) => {
                print_filler(&session, &letters);
                continue;
            }
            Line::Guess(guess) => guess,
        };

        if session.state().is_terminal() {
            println!("{}", "Game over. Type ':reset' to start again.\n".yellow());
            continue;
        }
        if let Err(e) = session.validate_guess(&guess) {
            println!("{} {e}\n", "❌".red());
            continue;
        }

        let feedback = loop {
            let Some(values) =
                get_user_input(input, "Enter the position values (e.g., 1 0 1 0 1)")?
            else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            };
            match values.parse::<Feedback>() {
                Ok(feedback) => break feedback,
                Err(e) => println!("{} {e}\n", "❌".red()),
            }
        };

        match session.apply(&guess, feedback) {
            Ok(outcome) => report_outcome(&session, outcome),
            Err(SessionError::GameOver(_)) => {
                println!("{}", "Game over. Type ':reset' to start again.\n".yellow());
            }
            Err(e) => println!("{} {e}\n", "❌".red()),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn report_outcome(session: &Session<'_>, outcome: GuessOutcome<'_>) {
    match outcome {
        GuessOutcome::Contradiction { reset } => {
            println!(
                "\n{}",
                "❌ No words match your criteria. Please check your inputs."
                    .red()
                    .bold()
            );
            if reset {
                println!("🔄 Reset to {} words\n", session.candidate_count());
            } else {
                println!("Type ':reset' to start over.\n");
            }
            return;
        }
        GuessOutcome::Solved(answer) => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "  🎉 The answer is: {}",
                answer.text().to_uppercase().bright_green().bold()
            );
            println!("{}\n", "═".repeat(60).bright_cyan());
            return;
        }
        GuessOutcome::Narrowed { .. } | GuessOutcome::OutOfGuesses { .. } => {}
    }

    let candidates = session.candidates();
    println!(
        "\nPossible words it could be: {}",
        format_word_list(candidates, MAX_LISTED_WORDS)
    );

    println!("Top {TOP_LETTERS} letter occurrences:");
    for (ch, count) in session.statistics().top_occurrences(TOP_LETTERS) {
        println!("  {}: {count}", letter(ch));
    }

    println!("Number of words remaining: {}", candidates.len());

    if let GuessOutcome::OutOfGuesses { remaining } = outcome {
        println!(
            "{}",
            format!("Out of guesses with {remaining} words left. Type ':reset' to start over.")
                .yellow()
        );
    } else if let Some(best) = session.best_guess() {
        println!(
            "Chosen Next Word: {}",
            best.word.text().to_uppercase().bright_yellow().bold()
        );
    }
    println!();
}

fn print_filler(session: &Session<'_>, letters: &str) {
    match session.filler_words(letters) {
        Ok(words) if words.is_empty() => println!("No filler words use only '{letters}'\n"),
        Ok(words) => println!(
            "Filler words ({}): {}\n",
            words.len(),
            format_word_list(&words, MAX_LISTED_WORDS)
        ),
        Err(e) => println!("{} {e}\n", "❌".red()),
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn corpus() -> WordCorpus {
        WordCorpus::from_strs(&["crane", "slate", "plate", "irate", "crate", "grate", "trace"])
    }

    #[test]
    fn runs_to_end_of_input() {
        let corpus = corpus();
        let mut input = Cursor::new("crate\n0 0 2 2 2\nslate\n0 2 2 2 2\n");
        assert!(run_simple_with(&corpus, SessionConfig::default(), &mut input).is_ok());
    }

    #[test]
    fn commands_and_bad_input_do_not_abort() {
        let corpus = corpus();
        let script = ":filler crate\n:filler abcdefg\nzzzzz\ncrate\n9 9 9 9 9\n00222\n:reset\n:quit\n";
        let mut input = Cursor::new(script);
        assert!(run_simple_with(&corpus, SessionConfig::default(), &mut input).is_ok());
    }

    #[test]
    fn commands_need_a_colon() {
        assert_eq!(parse_line("  "), Line::Blank);
        assert_eq!(parse_line(":reset"), Line::Reset);
        assert_eq!(parse_line(":New"), Line::Reset);
        assert_eq!(parse_line(":q"), Line::Quit);
        assert_eq!(parse_line("quit"), Line::Quit);
        assert_eq!(parse_line(":filler c r a"), Line::Filler("cra".to_string()));

        assert_eq!(parse_line("reset"), Line::Guess("reset".to_string()));
        assert_eq!(parse_line("RESET"), Line::Guess("reset".to_string()));
        assert_eq!(parse_line("filler abc"), Line::Guess("filler abc".to_string()));
    }

    #[test]
    fn reset_can_be_played_as_a_guess() {
        let corpus = WordCorpus::from_strs(&["reset", "crane", "inset", "beset"]);
        let mut input = Cursor::new("reset
02222
:quit
");
        assert!(run_simple_with(&corpus, SessionConfig::default(), &mut input).is_ok());

        let Line::Guess(guess) = parse_line("reset") else {
            panic!("reset should be a guess");
        };
        let session = Session::new(&corpus, SessionConfig::default());
        assert!(session.validate_guess(&guess).is_ok());
    }

    #[test]
    fn eof_while_waiting_for_values_quits() {
        let corpus = corpus();
        let mut input = Cursor::new("crate\n");
        assert!(run_simple_with(&corpus, SessionConfig::default(), &mut input).is_ok());
    }
}
