//! Display functions for command results

use super::formatters::{create_progress_bar, format_millis, format_word_listing};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the words found for a target
pub fn print_solve_result(result: &SolveResult, per_line: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Unscrambling: {}  {}",
        result.target.bright_yellow().bold(),
        format!("(mode {} → {})", result.mode, result.approach).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\nResult words:\n");
    if result.words.is_empty() {
        println!("{}", "(none)".bright_black());
    } else {
        println!("{}", format_word_listing(&result.words, per_line));
    }

    println!(
        "\n{} {} in {}\n",
        "✓".green().bold(),
        format!(
            "{} {}",
            result.words.len(),
            if result.words.len() == 1 { "word" } else { "words" }
        )
        .bright_cyan()
        .bold(),
        format_millis(result.duration)
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sample:".bright_cyan().bold());
    println!("   Words tested:     {}", result.sample.len());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let slowest_average = result
        .timings
        .iter()
        .map(|t| t.average.as_secs_f64())
        .fold(0.0, f64::max);

    println!("\n⏱  {}", "Average time per word:".bright_cyan().bold());
    for timing in &result.timings {
        let bar = create_progress_bar(timing.average.as_secs_f64(), slowest_average, 30);
        println!(
            "   {:<8} [{}] {}",
            timing.mode.to_string(),
            bar.green(),
            format_millis(timing.average).bright_yellow()
        );
    }

    println!("\n📈 {}", "Details:".bright_cyan().bold());
    for timing in &result.timings {
        println!(
            "   {:<8} runs: {:>5}  skipped: {:>5}  matches: {:>7}  total: {}",
            timing.mode.to_string(),
            timing.runs,
            timing.skipped,
            timing.matches,
            format_millis(timing.total)
        );
        if let Some((word, duration)) = &timing.slowest {
            println!(
                "            slowest: {} ({})",
                word.bright_white(),
                format_millis(*duration)
            );
        }
    }
}
