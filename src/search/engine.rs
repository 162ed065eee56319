//! Main combination search interface
//!
//! Finds every way a target-length dictionary word can be written as a
//! concatenation of two or more shorter dictionary words.

use super::index::WordIndex;
use super::mode::SearchMode;
use crate::core::{Combination, Word};
use crate::wordlist::Dictionary;
use rayon::prelude::*;

/// Combination search over a dictionary
///
/// Holds a dictionary together with its length index and the target word
/// length. Searches are read-only, so one finder can serve repeated calls.
pub struct CombinationFinder<'a> {
    dictionary: &'a Dictionary,
    index: WordIndex<'a>,
    target_len: usize,
}

impl<'a> CombinationFinder<'a> {
    /// Target word length used when none is configured
    pub const DEFAULT_TARGET_LEN: usize = 6;

    /// Create a finder over `dictionary` for targets of `target_len` letters
    ///
    /// Builds the length index up front; construction cannot fail.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, target_len: usize) -> Self {
        Self {
            dictionary,
            index: WordIndex::build(dictionary, target_len),
            target_len,
        }
    }

    /// The target word length this finder searches for
    #[inline]
    #[must_use]
    pub const fn target_len(&self) -> usize {
        self.target_len
    }

    /// The words eligible as split targets, in dictionary order
    #[must_use]
    pub fn target_words(&self) -> &[&'a Word] {
        self.index.words_of_len(self.target_len)
    }

    /// Run the search selected by `mode`
    #[must_use]
    pub fn find(&self, mode: SearchMode) -> Vec<Combination> {
        match mode {
            SearchMode::TwoWord => self.two_word_combinations(),
            SearchMode::Exhaustive => self.all_combinations(),
        }
    }

    /// Find every split of a target word into exactly two dictionary words
    ///
    /// Results are grouped by target word in dictionary order, then by
    /// ascending split point. A target with several valid split points
    /// yields one combination per split point.
    #[must_use]
    pub fn two_word_combinations(&self) -> Vec<Combination> {
        self.target_words()
            .par_iter()
            .flat_map_iter(|&target| self.two_word_splits(target))
            .collect()
    }

    fn two_word_splits(&self, target: &Word) -> Vec<Combination> {
        let key = target.key();
        let mut results = Vec::new();

        for split in 1..self.target_len {
            // Neither half can match if no word of its length exists.
            if !self.index.has_len(split) || !self.index.has_len(self.target_len - split) {
                continue;
            }

            let (left, right) = key.split_at(split);
            if let (Some(first), Some(second)) =
                (self.dictionary.get(left), self.dictionary.get(right))
            {
                results.push(Combination::new(
                    vec![first.clone(), second.clone()],
                    target.clone(),
                ));
            }
        }

        results
    }

    /// Find every split of a target word into two or more dictionary words
    ///
    /// Exhaustive: every partition whose pieces are all dictionary words is
    /// emitted, not just a first or greedy parse. The whole word matching
    /// itself does not count as a split.
    #[must_use]
    pub fn all_combinations(&self) -> Vec<Combination> {
        self.target_words()
            .par_iter()
            .flat_map_iter(|&target| self.combinations_for(target))
            .collect()
    }

    /// Enumerate every split of a single word over the dictionary
    ///
    /// The word itself does not have to be in the dictionary, and its length
    /// does not have to match the finder's target length.
    #[must_use]
    pub fn combinations_for(&self, target: &Word) -> Vec<Combination> {
        let mut parts: Vec<&'a Word> = Vec::new();
        let mut results = Vec::new();
        self.explore(target, 0, &mut parts, &mut results);
        results
    }

    /// Depth-first split enumeration from position `start`
    ///
    /// Tries every prefix of the remainder; on a dictionary hit, pushes the
    /// stored entry, recurses past it, then backtracks. Reaching the end of
    /// the word with at least two parts accumulated emits a combination.
    fn explore(
        &self,
        target: &Word,
        start: usize,
        parts: &mut Vec<&'a Word>,
        results: &mut Vec<Combination>,
    ) {
        let key = target.key();

        if start == key.len() {
            if parts.len() >= 2 {
                results.push(Combination::new(
                    parts.iter().copied().cloned().collect(),
                    target.clone(),
                ));
            }
            return;
        }

        for end in (start + 1)..=key.len() {
            if let Some(part) = self.dictionary.get(&key[start..end]) {
                parts.push(part);
                self.explore(target, end, parts, results);
                parts.pop();
            }
        }
    }
}
