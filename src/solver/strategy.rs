//! Unscrambling strategies
//!
//! Defines the Strategy trait and the two concrete algorithms.

use super::permutations::{Permutations, check_length};
use super::scanner::{distinct_in_order, par_scan_dictionary, scan_dictionary};
use super::{SolveError, SolverConfig};
use crate::dictionary::{Dictionary, Lexicon};

/// An algorithm that finds the dictionary words spelled by a target's letters
pub trait Strategy {
    /// Words formable from `target`, distinct, in first-discovery order
    ///
    /// # Errors
    ///
    /// Returns `SolveError` if the strategy refuses the target.
    fn unscramble(&self, target: &str, dictionary: &Dictionary) -> Result<Vec<String>, SolveError>;
}

/// Permutation generation followed by dictionary lookup
///
/// Output follows permutation order, not dictionary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermuteStrategy {
    /// Look words up while generating rather than after
    pub prune: bool,
    /// Length guard for the unpruned path
    pub max_len: usize,
}

impl PermuteStrategy {
    #[must_use]
    pub const fn from_config(config: &SolverConfig) -> Self {
        Self {
            prune: config.prune,
            max_len: config.max_permutation_len,
        }
    }
}

impl Strategy for PermuteStrategy {
    fn unscramble(&self, target: &str, dictionary: &Dictionary) -> Result<Vec<String>, SolveError> {
        if self.prune {
            return Ok(distinct_in_order(Permutations::pruned(target, dictionary)));
        }

        check_length(target, self.max_len)?;
        Ok(distinct_in_order(
            Permutations::new(target).filter(|candidate| dictionary.contains(candidate)),
        ))
    }
}

/// Full dictionary scan with multiset matching
///
/// Output follows dictionary order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStrategy {
    pub parallel: bool,
}

impl ScanStrategy {
    #[must_use]
    pub const fn from_config(config: &SolverConfig) -> Self {
        Self {
            parallel: config.parallel_scan,
        }
    }
}

impl Strategy for ScanStrategy {
    fn unscramble(&self, target: &str, dictionary: &Dictionary) -> Result<Vec<String>, SolveError> {
        if self.parallel {
            Ok(par_scan_dictionary(target, dictionary))
        } else {
            Ok(scan_dictionary(target, dictionary))
        }
    }
}
