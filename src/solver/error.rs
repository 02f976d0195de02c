//! Solver error type

use std::fmt;

/// Error returned when a run cannot produce a result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Unpruned permutation generation refused: output would grow as `len!`
    TargetTooLong { len: usize, max: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetTooLong { len, max } => write!(
                f,
                "Target has {len} letters; permutation mode is limited to {max} \
                 (use scan mode or enable pruning)"
            ),
        }
    }
}

impl std::error::Error for SolveError {}
