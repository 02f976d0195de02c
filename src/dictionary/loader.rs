//! Dictionary loading utilities
//!
//! Load a word list from a file, one entry per line, or from a static slice.
//! Lines are taken as-is: no trimming or case folding.

use super::{Dictionary, DictionaryError};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// Blank lines are kept as empty entries; the scanner skips them.
///
/// # Errors
///
/// Returns `DictionaryError::Unreadable` if the file is missing or cannot be
/// read. An existing empty file loads as an empty dictionary instead.
///
/// # Examples
/// ```no_run
/// use unscrambler::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("wordsEn.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::from_words(content.lines());
    log::debug!(
        "Loaded {} entries from {}",
        dictionary.len(),
        path.display()
    );

    Ok(dictionary)
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use unscrambler::dictionary::WORDS;
/// use unscrambler::dictionary::loader::from_slice;
///
/// let dictionary = from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice.iter().copied())
}
