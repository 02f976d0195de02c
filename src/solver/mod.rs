//! Unscrambling algorithms
//!
//! Permutation generation, dictionary scanning, and the mode selection that
//! chooses between them.

mod config;
mod engine;
mod error;
pub mod mode;
pub mod permutations;
pub mod scanner;
pub mod strategy;

pub use config::{DEFAULT_THRESHOLD, SolverConfig};
pub use engine::{Unscrambler, select_and_run};
pub use error::SolveError;
pub use mode::{Approach, Mode, ModeError};
pub use permutations::{DEFAULT_MAX_PERMUTATION_LEN, Permutations, generate_permutations};
pub use scanner::{par_scan_dictionary, scan_dictionary};
pub use strategy::{PermuteStrategy, ScanStrategy, Strategy};
