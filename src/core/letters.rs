//! Letter multiset and multiset matching
//!
//! A `LetterMultiset` maps each character of a word to the number of times it
//! occurs. Matching a candidate consumes letters from a private working copy,
//! so the source multiset is never mutated by a comparison.

use rustc_hash::FxHashMap;
use std::fmt;

/// Character counts of a word
///
/// Characters are compared exactly as given: no case folding or trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: FxHashMap<char, u32>,
    len: usize,
}

impl LetterMultiset {
    /// Build the multiset of letters in `word`
    ///
    /// # Examples
    /// ```
    /// use unscrambler::core::LetterMultiset;
    ///
    /// let letters = LetterMultiset::from_word("tree");
    /// assert_eq!(letters.count('e'), 2);
    /// assert_eq!(letters.count('t'), 1);
    /// assert_eq!(letters.count('z'), 0);
    /// assert_eq!(letters.len(), 4);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut len = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Remaining count for a letter (0 if absent)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, counting repeats
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Take one occurrence of `letter` out of the multiset
    ///
    /// Returns `false` (and leaves the multiset untouched) if the letter is
    /// absent or already used up. Counts never go negative.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `candidate` can be spelled from these letters
    ///
    /// The empty candidate never matches.
    ///
    /// # Examples
    /// ```
    /// use unscrambler::core::LetterMultiset;
    ///
    /// let tree = LetterMultiset::from_word("tree");
    /// assert!(tree.can_form("tee"));
    /// assert!(tree.can_form("ret"));
    /// assert!(!tree.can_form("treee")); // needs three e's
    /// assert!(!tree.can_form("a"));
    /// assert!(!tree.can_form(""));
    /// ```
    #[must_use]
    pub fn can_form(&self, candidate: &str) -> bool {
        // Longer than the source can never fit; skip copying the counts
        if candidate.is_empty() || candidate.chars().count() > self.len {
            return false;
        }

        let mut working = self.clone();
        candidate.chars().all(|ch| working.take(ch))
    }
}

impl From<&str> for LetterMultiset {
    fn from(word: &str) -> Self {
        Self::from_word(word)
    }
}

impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, u32)> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&ch, &count)| (ch, count))
            .collect();
        letters.sort_unstable();

        write!(f, "{{")?;
        for (i, (ch, count)) in letters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ch}:{count}")?;
        }
        write!(f, "}}")
    }
}

/// Decide whether `candidate` can be formed from the letters in `source`
///
/// Each letter of `source` may be used at most as many times as it occurs.
/// The empty candidate is never formable.
#[inline]
#[must_use]
pub fn can_form(candidate: &str, source: &LetterMultiset) -> bool {
    source.can_form(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let letters = LetterMultiset::from_word("telephone");
        assert_eq!(letters.count('e'), 3);
        assert_eq!(letters.count('t'), 1);
        assert_eq!(letters.count('x'), 0);
        assert_eq!(letters.len(), 9);
    }

    #[test]
    fn empty_word_is_empty_multiset() {
        let letters = LetterMultiset::from_word("");
        assert!(letters.is_empty());
        assert_eq!(letters.len(), 0);
    }

    #[test]
    fn take_never_goes_negative() {
        let mut letters = LetterMultiset::from_word("ee");
        assert!(letters.take('e'));
        assert!(letters.take('e'));
        assert!(!letters.take('e'));
        assert_eq!(letters.count('e'), 0);
        assert!(letters.is_empty());
    }

    #[test]
    fn take_absent_letter_fails() {
        let mut letters = LetterMultiset::from_word("abc");
        assert!(!letters.take('z'));
        assert_eq!(letters.len(), 3);
    }

    #[test]
    fn tree_scenario() {
        let tree = LetterMultiset::from_word("tree");
        assert!(can_form("tee", &tree));
        assert!(can_form("ret", &tree));
        assert!(can_form("ere", &tree));
        assert!(can_form("tree", &tree));
        assert!(!can_form("treee", &tree));
        assert!(!can_form("a", &tree));
    }

    #[test]
    fn empty_candidate_never_matches() {
        for source in ["", "a", "tree", "telephone"] {
            assert!(!can_form("", &LetterMultiset::from_word(source)));
        }
    }

    #[test]
    fn empty_source_matches_nothing() {
        let empty = LetterMultiset::from_word("");
        assert!(!can_form("a", &empty));
        assert!(!can_form("tree", &empty));
    }

    #[test]
    fn matching_does_not_consume_source() {
        let tree = LetterMultiset::from_word("tree");
        assert!(tree.can_form("tree"));
        assert!(tree.can_form("tree"));
        assert_eq!(tree.count('e'), 2);
    }

    #[test]
    fn invariant_under_candidate_reordering() {
        let source = LetterMultiset::from_word("helicopter");
        for candidate in ["police", "ecilop", "liceop", "hotel", "letoh"] {
            assert!(can_form(candidate, &source), "{candidate}");
        }
        for candidate in ["pool", "loop", "olop"] {
            assert!(!can_form(candidate, &source), "{candidate}");
        }
    }

    #[test]
    fn invariant_under_source_reordering() {
        let candidates = ["tee", "ret", "tree", "treee", "tt"];
        let sources = ["tree", "eert", "rete", "eter"];

        for candidate in candidates {
            let expected = can_form(candidate, &LetterMultiset::from_word(sources[0]));
            for source in &sources[1..] {
                assert_eq!(
                    can_form(candidate, &LetterMultiset::from_word(source)),
                    expected,
                    "{candidate} vs {source}"
                );
            }
        }
    }

    #[test]
    fn case_is_significant() {
        let letters = LetterMultiset::from_word("Tree");
        assert!(!can_form("tree", &letters));
        assert!(can_form("Tree", &letters));
    }

    #[test]
    fn non_ascii_letters_count_as_single_characters() {
        let letters = LetterMultiset::from_word("café");
        assert_eq!(letters.len(), 4);
        assert!(can_form("éca", &letters));
        assert!(!can_form("cafe", &letters));
    }

    #[test]
    fn display_lists_sorted_counts() {
        let letters = LetterMultiset::from_word("tree");
        assert_eq!(letters.to_string(), "{e:2, r:1, t:1}");
    }
}
