//! Core domain types for unscrambling
//!
//! This module contains the letter multiset and the matching rule built on it.
//! Everything here is pure and has no knowledge of dictionaries or strategies.

mod letters;

pub use letters::{LetterMultiset, can_form};
