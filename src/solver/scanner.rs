//! Dictionary scanning
//!
//! Walks every dictionary entry and keeps those that can be spelled from the
//! target's letters. Cost is linear in dictionary size and does not depend on
//! the factorial growth of the target's permutations.

use crate::core::LetterMultiset;
use crate::dictionary::Dictionary;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Scan `dictionary` for words formable from `target`
///
/// Output keeps dictionary order, has no duplicates and never contains the
/// empty string.
///
/// # Examples
/// ```
/// use unscrambler::dictionary::Dictionary;
/// use unscrambler::solver::scan_dictionary;
///
/// let dictionary = Dictionary::from_words(["tee", "ret", "ere", "tree", "treee", "a"]);
/// assert_eq!(scan_dictionary("tree", &dictionary), ["tee", "ret", "ere", "tree"]);
/// ```
#[must_use]
pub fn scan_dictionary(target: &str, dictionary: &Dictionary) -> Vec<String> {
    let letters = LetterMultiset::from_word(target);

    distinct_in_order(
        dictionary
            .iter()
            .filter(|word| letters.can_form(word))
            .map(String::as_str),
    )
}

/// Parallel [`scan_dictionary`]
///
/// Entries are independent and the target multiset is shared read-only; the
/// indexed collect puts matches back in dictionary order before deduplication.
#[must_use]
pub fn par_scan_dictionary(target: &str, dictionary: &Dictionary) -> Vec<String> {
    let letters = LetterMultiset::from_word(target);

    let matches: Vec<&str> = dictionary
        .words()
        .par_iter()
        .filter(|word| letters.can_form(word))
        .map(String::as_str)
        .collect();

    distinct_in_order(matches)
}

/// Keep the first occurrence of each non-empty word
pub(crate) fn distinct_in_order<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut result = Vec::new();

    for word in words {
        let word = word.as_ref();
        if !word.is_empty() && seen.insert(word.to_string()) {
            result.push(word.to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::can_form;

    fn reference_dictionary() -> Dictionary {
        Dictionary::from_words(["tee", "ret", "ere", "tree", "treee", "a"])
    }

    #[test]
    fn tree_scenario() {
        let result = scan_dictionary("tree", &reference_dictionary());
        assert_eq!(result, ["tee", "ret", "ere", "tree"]);
    }

    #[test]
    fn empty_target_finds_nothing() {
        let result = scan_dictionary("", &reference_dictionary());
        assert!(result.is_empty());
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let result = scan_dictionary("tree", &Dictionary::default());
        assert!(result.is_empty());
    }

    #[test]
    fn skips_empty_entries() {
        let dictionary = Dictionary::from_words(["", "tee", ""]);
        assert_eq!(scan_dictionary("tree", &dictionary), ["tee"]);
    }

    #[test]
    fn removes_duplicates_keeping_first_position() {
        let dictionary = Dictionary::from_words(["ret", "tee", "ret", "ere", "tee"]);
        assert_eq!(scan_dictionary("tree", &dictionary), ["ret", "tee", "ere"]);
    }

    #[test]
    fn preserves_dictionary_order() {
        let dictionary = Dictionary::embedded();
        let result = scan_dictionary("telephone", &dictionary);

        let positions: Vec<usize> = result
            .iter()
            .map(|w| dictionary.iter().position(|d| d == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_result_is_formable() {
        let dictionary = Dictionary::embedded();
        let target = LetterMultiset::from_word("helicopter");

        let result = scan_dictionary("helicopter", &dictionary);
        assert!(!result.is_empty());
        for word in &result {
            assert!(!word.is_empty());
            assert!(can_form(word, &target), "{word}");
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let dictionary = Dictionary::embedded();
        for target in ["tree", "telephone", "helicopter", "a", ""] {
            assert_eq!(
                par_scan_dictionary(target, &dictionary),
                scan_dictionary(target, &dictionary),
                "{target}"
            );
        }
    }

    #[test]
    fn distinct_in_order_drops_empties() {
        let words = distinct_in_order(["b", "", "a", "b"]);
        assert_eq!(words, ["b", "a"]);
    }
}
