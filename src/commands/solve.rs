//! Unscramble command
//!
//! Runs one target word through the unscrambler and times it.

use crate::solver::{Approach, Mode, SolveError, Unscrambler};
use std::time::{Duration, Instant};

/// Configuration for unscrambling a word
pub struct SolveConfig {
    pub target: String,
    pub mode: Mode,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, mode: Mode) -> Self {
        Self { target, mode }
    }
}

/// Result of unscrambling a word
pub struct SolveResult {
    pub target: String,
    pub mode: Mode,
    pub approach: Approach,
    pub words: Vec<String>,
    pub duration: Duration,
}

/// Unscramble a target word
///
/// # Errors
///
/// Returns an error if the resolved strategy refuses the target (unpruned
/// permutation past the length guard).
pub fn solve_word(config: SolveConfig, unscrambler: &Unscrambler) -> Result<SolveResult, SolveError> {
    let start = Instant::now();

    let approach = unscrambler.resolve(&config.target, config.mode);
    let words = unscrambler.run_approach(&config.target, approach)?;

    let duration = start.elapsed();
    log::debug!(
        "Found {} words for '{}' in {:.3}ms",
        words.len(),
        config.target,
        duration.as_secs_f64() * 1000.0
    );

    Ok(SolveResult {
        target: config.target,
        mode: config.mode,
        approach,
        words,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::solver::SolverConfig;

    #[test]
    fn solve_reports_resolved_approach() {
        let dictionary = Dictionary::embedded();
        let unscrambler = Unscrambler::new(&dictionary, SolverConfig::default());

        let short = solve_word(SolveConfig::new("tea".to_string(), Mode::Auto), &unscrambler).unwrap();
        assert_eq!(short.approach, Approach::Permute);
        assert_eq!(short.mode, Mode::Auto);

        let long =
            solve_word(SolveConfig::new("telephone".to_string(), Mode::Auto), &unscrambler).unwrap();
        assert_eq!(long.approach, Approach::Scan);
    }

    #[test]
    fn solve_finds_words() {
        let dictionary = Dictionary::from_words(["tee", "ret", "ere", "tree", "treee", "a"]);
        let unscrambler = Unscrambler::new(&dictionary, SolverConfig::default());

        let result = solve_word(SolveConfig::new("tree".to_string(), Mode::Scan), &unscrambler).unwrap();
        assert_eq!(result.target, "tree");
        assert_eq!(result.words, ["tee", "ret", "ere", "tree"]);
    }

    #[test]
    fn solve_empty_target() {
        let dictionary = Dictionary::embedded();
        let unscrambler = Unscrambler::new(&dictionary, SolverConfig::default());

        let result = solve_word(SolveConfig::new(String::new(), Mode::Auto), &unscrambler).unwrap();
        assert!(result.words.is_empty());
    }

    #[test]
    fn solve_propagates_length_guard() {
        let dictionary = Dictionary::embedded();
        let unscrambler = Unscrambler::new(
            &dictionary,
            SolverConfig::default().with_max_permutation_len(3),
        );

        let result = solve_word(SolveConfig::new("tree".to_string(), Mode::Permute), &unscrambler);
        assert!(matches!(result, Err(SolveError::TargetTooLong { len: 4, max: 3 })));
    }
}
