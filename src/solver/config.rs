//! Solver configuration

use super::permutations::DEFAULT_MAX_PERMUTATION_LEN;

/// Default length at which AUTO switches from permuting to scanning
///
/// Targets shorter than this are permuted. The crossover depends on
/// dictionary size and hardware; 4 is the other commonly used value.
pub const DEFAULT_THRESHOLD: usize = 5;

/// Tunables shared by every run of an [`Unscrambler`](super::Unscrambler)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// AUTO permutes targets strictly shorter than this
    pub threshold: usize,
    /// Check dictionary membership during permutation instead of after
    pub prune: bool,
    /// Longest target the unpruned permutation path accepts
    pub max_permutation_len: usize,
    /// Scan the dictionary on the rayon thread pool
    pub parallel_scan: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            prune: false,
            max_permutation_len: DEFAULT_MAX_PERMUTATION_LEN,
            parallel_scan: false,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    #[must_use]
    pub const fn with_max_permutation_len(mut self, max_len: usize) -> Self {
        self.max_permutation_len = max_len;
        self
    }

    #[must_use]
    pub const fn with_parallel_scan(mut self, parallel: bool) -> Self {
        self.parallel_scan = parallel;
        self
    }
}
