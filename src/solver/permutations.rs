//! Prefix-permutation generation
//!
//! Produces every ordered arrangement of every length (1..=n) of a word's
//! letters, in the order a depth-first walk visits them: `"ab"` yields
//! `a, ab, b, ba`. Repeated letters are distinct occurrences, so `"aa"` yields
//! `a, aa, a, aa`; callers deduplicate.
//!
//! The walk uses an explicit stack, so long inputs never deepen the call
//! stack. Each frame owns its prefix and the indices of the letters it has
//! left; both are copied once when the frame is pushed.

use super::SolveError;
use crate::dictionary::Lexicon;

/// Longest target the unpruned generator accepts by default
///
/// Unpruned output for `n` letters is `sum(n!/(n-k)!)` strings; 9 letters is
/// just under a million, 10 is nearly ten million.
pub const DEFAULT_MAX_PERMUTATION_LEN: usize = 9;

struct Frame {
    prefix: String,
    remaining: Vec<usize>,
}

/// Lazy depth-first iterator over prefix-permutations
///
/// With a lexicon attached, only dictionary members are yielded and only
/// dictionary prefixes are descended into.
pub struct Permutations<'a> {
    letters: Vec<char>,
    stack: Vec<Frame>,
    lexicon: Option<&'a dyn Lexicon>,
}

impl<'a> Permutations<'a> {
    /// Unpruned generator, no length limit
    ///
    /// Prefer [`generate_permutations`] unless the caller bounds the input.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self::build(word, None)
    }

    /// Generator pruned against `lexicon`
    ///
    /// # Examples
    /// ```
    /// use unscrambler::dictionary::Dictionary;
    /// use unscrambler::solver::Permutations;
    ///
    /// let dictionary = Dictionary::from_words(["tee", "ret", "tree", "a"]);
    /// let mut found: Vec<String> = Permutations::pruned("tree", &dictionary).collect();
    /// found.sort();
    /// found.dedup();
    /// assert_eq!(found, ["ret", "tee", "tree"]);
    /// ```
    #[must_use]
    pub fn pruned(word: &str, lexicon: &'a dyn Lexicon) -> Self {
        Self::build(word, Some(lexicon))
    }

    fn build(word: &str, lexicon: Option<&'a dyn Lexicon>) -> Self {
        let letters: Vec<char> = word.chars().collect();
        let root = Frame {
            prefix: String::new(),
            remaining: (0..letters.len()).collect(),
        };

        let mut permutations = Self {
            letters,
            stack: Vec::new(),
            lexicon,
        };
        permutations.push_children(&root);
        permutations
    }

    /// Push one child per remaining letter occurrence, last first, so the
    /// first letter is popped first.
    fn push_children(&mut self, frame: &Frame) {
        for (slot, &index) in frame.remaining.iter().enumerate().rev() {
            let mut prefix = String::with_capacity(frame.prefix.len() + 4);
            prefix.push_str(&frame.prefix);
            prefix.push(self.letters[index]);

            if let Some(lexicon) = self.lexicon
                && !lexicon.contains_prefix(&prefix)
            {
                continue;
            }

            let mut remaining = Vec::with_capacity(frame.remaining.len() - 1);
            remaining.extend_from_slice(&frame.remaining[..slot]);
            remaining.extend_from_slice(&frame.remaining[slot + 1..]);

            self.stack.push(Frame { prefix, remaining });
        }
    }
}

impl Iterator for Permutations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(frame) = self.stack.pop() {
            self.push_children(&frame);

            match self.lexicon {
                Some(lexicon) if !lexicon.contains(&frame.prefix) => {}
                _ => return Some(frame.prefix),
            }
        }
        None
    }
}

/// Collect every prefix-permutation of `word`
///
/// # Errors
///
/// Returns `SolveError::TargetTooLong` if `word` has more than `max_len`
/// letters.
///
/// # Examples
/// ```
/// use unscrambler::solver::generate_permutations;
///
/// let perms = generate_permutations("ab", 9).unwrap();
/// assert_eq!(perms, ["a", "ab", "b", "ba"]);
///
/// assert!(generate_permutations("abcdefghij", 9).is_err());
/// ```
pub fn generate_permutations(word: &str, max_len: usize) -> Result<Vec<String>, SolveError> {
    check_length(word, max_len)?;
    Ok(Permutations::new(word).collect())
}

/// Enforce the unpruned length guard
pub(crate) fn check_length(word: &str, max_len: usize) -> Result<(), SolveError> {
    let len = word.chars().count();
    if len > max_len {
        return Err(SolveError::TargetTooLong { len, max: max_len });
    }
    Ok(())
}
