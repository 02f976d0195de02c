//! Formatting utilities for terminal output

use std::time::Duration;

/// Lay out words as a comma-separated listing, `per_line` entries per line
///
/// A `per_line` of zero is treated as one.
#[must_use]
pub fn format_word_listing(words: &[String], per_line: usize) -> String {
    words
        .chunks(per_line.max(1))
        .map(|line| line.join(", "))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Format a duration in milliseconds with sub-millisecond precision
#[must_use]
pub fn format_millis(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.0)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
