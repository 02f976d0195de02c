//! Benchmark command
//!
//! Times each mode over a random sample of dictionary words.

use crate::dictionary::Dictionary;
use crate::solver::{Mode, SolveError, Unscrambler};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of words to sample
    pub count: usize,
    /// Seed for reproducible samples
    pub seed: Option<u64>,
    /// Modes to time, in order
    pub modes: Vec<Mode>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            modes: Mode::ALL.to_vec(),
            show_progress: true,
        }
    }
}

/// Timings for one mode
pub struct ModeTiming {
    pub mode: Mode,
    /// Words actually unscrambled
    pub runs: usize,
    /// Words the mode refused (too long to permute)
    pub skipped: usize,
    /// Total words found across all runs
    pub matches: usize,
    pub total: Duration,
    pub average: Duration,
    pub slowest: Option<(String, Duration)>,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub sample: Vec<String>,
    pub timings: Vec<ModeTiming>,
    pub duration: Duration,
}

/// Pick `count` random non-empty words from `dictionary`, with replacement
#[must_use]
pub fn sample_words(dictionary: &Dictionary, count: usize, seed: Option<u64>) -> Vec<String> {
    let pool: Vec<&String> = dictionary.iter().filter(|w| !w.is_empty()).collect();
    if pool.is_empty() {
        return Vec::new();
    }

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..count)
        .map(|_| pool[rng.random_range(0..pool.len())].clone())
        .collect()
}

/// Run every configured mode over a random sample
pub fn run_benchmark(unscrambler: &Unscrambler, config: &BenchmarkConfig) -> BenchmarkResult {
    let start = Instant::now();
    let sample = sample_words(unscrambler.dictionary(), config.count, config.seed);
    log::info!(
        "Benchmarking {} modes on {} words",
        config.modes.len(),
        sample.len()
    );

    let pb = if config.show_progress {
        ProgressBar::new((sample.len() * config.modes.len()) as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let timings = config
        .modes
        .iter()
        .map(|&mode| {
            pb.set_message(format!("mode: {mode}"));
            time_mode(unscrambler, mode, &sample, &pb)
        })
        .collect();

    pb.finish_with_message("Complete!");

    BenchmarkResult {
        sample,
        timings,
        duration: start.elapsed(),
    }
}

fn time_mode(unscrambler: &Unscrambler, mode: Mode, sample: &[String], pb: &ProgressBar) -> ModeTiming {
    let mut runs = 0;
    let mut skipped = 0;
    let mut matches = 0;
    let mut total = Duration::ZERO;
    let mut slowest: Option<(String, Duration)> = None;

    for word in sample {
        let word_start = Instant::now();
        let result = unscrambler.run(word, mode);
        let elapsed = word_start.elapsed();

        match result {
            Ok(found) => {
                runs += 1;
                matches += found.len();
                total += elapsed;
                if slowest.as_ref().is_none_or(|(_, worst)| elapsed > *worst) {
                    slowest = Some((word.clone(), elapsed));
                }
            }
            Err(SolveError::TargetTooLong { .. }) => skipped += 1,
        }
        pb.inc(1);
    }

    let average = u32::try_from(runs)
        .ok()
        .and_then(|n| total.checked_div(n))
        .unwrap_or_default();

    ModeTiming {
        mode,
        runs,
        skipped,
        matches,
        total,
        average,
        slowest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;

    fn quiet_config(count: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            seed: Some(7),
            show_progress: false,
            ..BenchmarkConfig::new(count)
        }
    }

    #[test]
    fn sample_is_reproducible_with_seed() {
        let dictionary = Dictionary::embedded();
        let first = sample_words(&dictionary, 20, Some(42));
        let second = sample_words(&dictionary, 20, Some(42));

        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
    }

    #[test]
    fn sample_skips_empty_entries() {
        let dictionary = Dictionary::from_words(["", "tee", ""]);
        let sample = sample_words(&dictionary, 10, Some(1));
        assert!(sample.iter().all(|w| w == "tee"));
    }

    #[test]
    fn sample_from_empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(sample_words(&dictionary, 10, Some(1)).is_empty());
    }

    #[test]
    fn benchmark_times_every_mode() {
        let dictionary = Dictionary::embedded();
        let unscrambler = Unscrambler::new(
            &dictionary,
            SolverConfig::default().with_max_permutation_len(6),
        );

        let result = run_benchmark(&unscrambler, &quiet_config(10));

        assert_eq!(result.sample.len(), 10);
        assert_eq!(result.timings.len(), 3);
        for timing in &result.timings {
            assert_eq!(timing.runs + timing.skipped, 10, "{}", timing.mode);
            assert!(timing.total <= result.duration);
        }
    }

    #[test]
    fn modes_find_the_same_number_of_words() {
        let dictionary = Dictionary::embedded();
        let unscrambler = Unscrambler::new(&dictionary, SolverConfig::default().with_prune(true));

        let result = run_benchmark(&unscrambler, &quiet_config(15));
        let counts: Vec<usize> = result.timings.iter().map(|t| t.matches).collect();

        assert!(result.timings.iter().all(|t| t.skipped == 0));
        assert!(counts.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn permute_skips_long_words() {
        let dictionary = Dictionary::from_words(["helicopter"]);
        let unscrambler = Unscrambler::new(&dictionary, SolverConfig::default());

        let config = BenchmarkConfig {
            modes: vec![Mode::Permute],
            ..quiet_config(3)
        };
        let result = run_benchmark(&unscrambler, &config);

        let timing = &result.timings[0];
        assert_eq!(timing.skipped, 3);
        assert_eq!(timing.runs, 0);
        assert_eq!(timing.average, Duration::ZERO);
        assert!(timing.slowest.is_none());
    }
}
