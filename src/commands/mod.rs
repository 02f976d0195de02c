//! Command implementations

pub mod benchmark;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, ModeTiming, run_benchmark, sample_words};
pub use solve::{SolveConfig, SolveResult, solve_word};
