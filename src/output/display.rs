//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, format_word_list, letter};
use crate::commands::{FillerResult, SolveResult, StatsReport, SuggestResult};
use crate::core::{ALPHABET_SIZE, WORD_LENGTH, letter_at};
use crate::solver::LetterStatistics;
use colored::Colorize;

const MAX_LISTED_WORDS: usize = 30;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print ranked suggestions after replayed guesses
pub fn print_suggest_result(result: &SuggestResult<'_>) {
    print_header("SUGGESTIONS");

    if !result.history.is_empty() {
        println!();
        for (i, record) in result.history.iter().enumerate() {
            println!(
                "  {}. {}  {} → {}",
                (i + 1).to_string().bright_black(),
                colored_guess(record.guess.text(), record.feedback),
                record.candidates_before,
                record.candidates_after
            );
        }
    }

    println!(
        "\n📊 {} candidates: {}",
        result.candidates.len().to_string().bright_yellow().bold(),
        format_word_list(&result.candidates, MAX_LISTED_WORDS)
    );

    println!("\n🎯 {}", "Ranked guesses:".bright_cyan().bold());
    for (i, scored) in result.suggestions.iter().enumerate() {
        let name = scored.word.text().to_uppercase();
        let name = if i == 0 {
            name.bright_green().bold()
        } else {
            name.normal()
        };
        println!("  {:>3}. {name}  {}", i + 1, scored.score);
    }
}

/// Print a letter statistics report
pub fn print_stats_report(report: &StatsReport) {
    print_header("LETTER STATISTICS");
    println!(
        "\n{} candidates after {} guess(es)",
        report.candidates.to_string().bright_yellow().bold(),
        report.guesses
    );
    print_statistics(&report.statistics);
}

/// Print occurrence and frequency bars plus the position table
pub fn print_statistics(stats: &LetterStatistics) {
    let max = stats.occurrences().iter().copied().max().unwrap_or(0);

    println!("\n📈 {}", "Occurrence / frequency:".bright_cyan().bold());
    for (ch, count) in stats.top_occurrences(ALPHABET_SIZE) {
        if count == 0 {
            continue;
        }
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        println!(
            "  {}  {} {count:4} / {:4}",
            letter(ch).to_string().bold(),
            bar.green(),
            stats.frequency(ch)
        );
    }

    println!("\n📐 {}", "Positions:".bright_cyan().bold());
    let header: String = (1..=WORD_LENGTH).map(|p| format!("{p:>6}")).collect();
    println!("     {}", header.bright_black());
    for i in 0..ALPHABET_SIZE {
        let ch = letter_at(i);
        let positions = stats.positions(ch);
        if positions.iter().all(|&n| n == 0) {
            continue;
        }
        let row: String = positions.iter().map(|n| format!("{n:>6}")).collect();
        println!("  {}  {row}", letter(ch).to_string().bold());
    }
}

/// Print filler words for a letter query
pub fn print_filler_result(result: &FillerResult<'_>) {
    print_header("FILLER WORDS");
    println!(
        "\nLetters: {}",
        result.letters.to_uppercase().bright_yellow().bold()
    );

    if result.words.is_empty() {
        println!("No words use only these letters.");
        return;
    }
    println!(
        "{} word(s): {}",
        result.words.len(),
        format_word_list(&result.words, usize::MAX)
    );
}

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
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.score > 0 {
                println!("  Score:      {}", step.score);
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
