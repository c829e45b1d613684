//! Test all words - helper evaluation over the corpus
//!
//! Plays every corpus word as the hidden answer and collects statistics.

use super::solve::solve_word;
use crate::solver::SessionConfig;
use crate::wordlists::WordCorpus;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug, Default)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    pub first_guess_used: FxHashMap<String, usize>,
}

/// Solve every corpus word (or the first `limit`) and summarize
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a solve fails.
pub fn run_test_all(
    corpus: &WordCorpus,
    config: SessionConfig,
    limit: Option<usize>,
) -> Result<TestAllStatistics> {
    let total = limit.unwrap_or(corpus.len()).min(corpus.len());

    println!("🎯 Testing {total} words...");

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut stats = TestAllStatistics {
        total_words: total,
        ..TestAllStatistics::default()
    };
    let mut solved_guesses: Vec<(String, usize)> = Vec::new();
    let start = Instant::now();

    for (idx, word) in corpus.iter().take(total).enumerate() {
        let result = solve_word(corpus, config, word.text())?;

        if let Some(first) = result.guesses.first() {
            *stats.first_guess_used.entry(first.word.clone()).or_insert(0) += 1;
        }

        if result.success {
            let count = result.guesses.len();
            *stats.guess_distribution.entry(count).or_insert(0) += 1;
            solved_guesses.push((result.target, count));
        } else {
            stats.failed_words.push(result.target);
        }

        if idx % 10 == 0 && !solved_guesses.is_empty() {
            let sum: usize = solved_guesses.iter().map(|(_, n)| n).sum();
            let avg = sum as f64 / solved_guesses.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    stats.total_time = start.elapsed();

    stats.solved = solved_guesses.len();
    stats.failed = stats.failed_words.len();

    let total_guesses: usize = solved_guesses.iter().map(|(_, n)| n).sum();
    if stats.solved > 0 {
        stats.average_guesses = total_guesses as f64 / stats.solved as f64;
    }
    stats.max_guesses = solved_guesses.iter().map(|(_, n)| *n).max().unwrap_or(0);
    stats.min_guesses = solved_guesses.iter().map(|(_, n)| *n).min().unwrap_or(0);

    solved_guesses.sort_by(|(wa, na), (wb, nb)| nb.cmp(na).then_with(|| wa.cmp(wb)));
    solved_guesses.truncate(10);
    stats.worst_words = solved_guesses;

    log::info!(
        "test-all: {}/{} solved in {:.2}s",
        stats.solved,
        stats.total_words,
        stats.total_time.as_secs_f64()
    );
    Ok(stats)
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    if stats.total_words == 0 {
        println!("\nNo words tested.");
        return;
    }
    let total = stats.total_words as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Not Solved".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.failed_words.len() > 10 {
            println!("  and {} more", stats.failed_words.len() - 10);
        }
    }

    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then_with(|| wa.cmp(wb)));
    for (word, count) in first_guesses.iter().take(5) {
        let percentage = **count as f64 / total * 100.0;
        println!(
            "  {}: {} times ({:.1}%)",
            word.to_uppercase(),
            count,
            percentage
        );
    }
}
