//! Main unscrambler interface

use super::mode::{Approach, Mode};
use super::strategy::{PermuteStrategy, ScanStrategy, Strategy};
use super::{SolveError, SolverConfig};
use crate::dictionary::Dictionary;

/// Main unscrambler
///
/// Borrows a dictionary read-only and dispatches each run to the strategy its
/// mode resolves to.
pub struct Unscrambler<'a> {
    dictionary: &'a Dictionary,
    config: SolverConfig,
}

impl<'a> Unscrambler<'a> {
    /// Create an unscrambler over `dictionary`
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: SolverConfig) -> Self {
        Self { dictionary, config }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Which algorithm `mode` picks for `target`
    #[must_use]
    pub fn resolve(&self, target: &str, mode: Mode) -> Approach {
        mode.resolve(target.chars().count(), &self.config)
    }

    /// Find every dictionary word formable from `target`
    ///
    /// # Errors
    ///
    /// Returns `SolveError::TargetTooLong` when unpruned permutation is forced
    /// on a target past the length guard.
    pub fn run(&self, target: &str, mode: Mode) -> Result<Vec<String>, SolveError> {
        let approach = self.resolve(target, mode);
        log::debug!("Unscrambling '{target}' with mode {mode} -> {approach}");

        self.run_approach(target, approach)
    }

    /// Run a specific algorithm, skipping mode resolution
    ///
    /// # Errors
    ///
    /// See [`Unscrambler::run`].
    pub fn run_approach(&self, target: &str, approach: Approach) -> Result<Vec<String>, SolveError> {
        match approach {
            Approach::Permute => {
                PermuteStrategy::from_config(&self.config).unscramble(target, self.dictionary)
            }
            Approach::Scan => {
                ScanStrategy::from_config(&self.config).unscramble(target, self.dictionary)
            }
        }
    }
}

/// One-shot form of [`Unscrambler::run`]
///
/// # Errors
///
/// See [`Unscrambler::run`].
///
/// # Examples
/// ```
/// use unscrambler::dictionary::Dictionary;
/// use unscrambler::solver::{Mode, SolverConfig, select_and_run};
///
/// let dictionary = Dictionary::from_words(["tee", "ret", "ere", "tree", "treee", "a"]);
/// let words = select_and_run("tree", &dictionary, Mode::Scan, &SolverConfig::default()).unwrap();
/// assert_eq!(words, ["tee", "ret", "ere", "tree"]);
/// ```
pub fn select_and_run(
    target: &str,
    dictionary: &Dictionary,
    mode: Mode,
    config: &SolverConfig,
) -> Result<Vec<String>, SolveError> {
    Unscrambler::new(dictionary, *config).run(target, mode)
}
