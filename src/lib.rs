//! Word Unscrambler
//!
//! Finds every dictionary word that can be spelled from the letters of a
//! target word, each letter used at most as often as it appears in the target.
//! Two algorithms are available: permutation generation with lookup, and a
//! dictionary scan with multiset matching. AUTO picks between them by target
//! length.
//!
//! # Quick Start
//!
//! ```rust
//! use unscrambler::dictionary::Dictionary;
//! use unscrambler::solver::{Mode, SolverConfig, Unscrambler};
//!
//! let dictionary = Dictionary::from_words(["tee", "ret", "ere", "tree", "treee", "a"]);
//! let unscrambler = Unscrambler::new(&dictionary, SolverConfig::default());
//!
//! let words = unscrambler.run("tree", Mode::Auto).unwrap();
//! assert_eq!(words.len(), 4);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Unscrambling algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logging setup
pub mod logging;
