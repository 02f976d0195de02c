//! Dictionaries for unscrambling
//!
//! A `Dictionary` keeps its words in source order (duplicates and empty
//! entries included) alongside a membership index. The matching code only ever
//! borrows it.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Membership test used to prune permutation generation
pub trait Lexicon {
    /// Is `word` a dictionary entry?
    fn contains(&self, word: &str) -> bool;

    /// Does any dictionary entry start with `prefix`?
    fn contains_prefix(&self, prefix: &str) -> bool;
}

/// Ordered word list with O(1) membership
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    members: FxHashSet<String>,
    prefixes: OnceLock<FxHashSet<String>>,
}

impl Dictionary {
    /// Build a dictionary from words in order
    ///
    /// # Examples
    /// ```
    /// use unscrambler::dictionary::{Dictionary, Lexicon};
    ///
    /// let dictionary = Dictionary::from_words(["tee", "ret", "tee"]);
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.contains("ret"));
    /// assert!(dictionary.contains_prefix("te"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let members = words.iter().cloned().collect();

        Self {
            words,
            members,
            prefixes: OnceLock::new(),
        }
    }

    /// The built-in word list
    #[must_use]
    pub fn embedded() -> Self {
        loader::from_slice(WORDS)
    }

    /// Words in source order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Number of entries, counting duplicates and empty lines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Lower-cased copy, for callers that want case-insensitive matching
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        Self::from_words(self.words.iter().map(|word| word.to_lowercase()))
    }

    /// Every prefix of every entry, built on first use
    fn prefix_index(&self) -> &FxHashSet<String> {
        self.prefixes.get_or_init(|| {
            let mut prefixes = FxHashSet::default();
            for word in &self.words {
                for (end, ch) in word.char_indices() {
                    prefixes.insert(word[..end + ch.len_utf8()].to_string());
                }
            }
            prefixes
        })
    }
}

impl Lexicon for Dictionary {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        prefix.is_empty() || self.prefix_index().contains(prefix)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list file is missing or could not be read
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Could not read dictionary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
        }
    }
}
