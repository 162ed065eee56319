//! Word-by-length index
//!
//! Buckets dictionary words by exact length so the search only probes
//! lengths that can actually occur inside a target word.

use crate::core::Word;
use crate::wordlist::Dictionary;
use rustc_hash::FxHashMap;

/// Index of dictionary words grouped by length
///
/// Built in one pass over the dictionary. Only words no longer than
/// `max_len` are retained, since anything longer can never be a part of a
/// `max_len`-length target. Buckets keep dictionary iteration order.
#[derive(Debug)]
pub struct WordIndex<'a> {
    buckets: FxHashMap<usize, Vec<&'a Word>>,
    max_len: usize,
}

impl<'a> WordIndex<'a> {
    /// Build the index for words of length `1..=max_len`
    ///
    /// An empty dictionary yields an empty index; construction cannot fail.
    #[must_use]
    pub fn build(dictionary: &'a Dictionary, max_len: usize) -> Self {
        let mut buckets: FxHashMap<usize, Vec<&'a Word>> = FxHashMap::default();

        for word in dictionary.iter() {
            if word.len() <= max_len {
                buckets.entry(word.len()).or_default().push(word);
            }
        }

        Self { buckets, max_len }
    }

    /// Words of exactly `len`, in dictionary order
    ///
    /// Returns an empty slice if no word has that length.
    #[must_use]
    pub fn words_of_len(&self, len: usize) -> &[&'a Word] {
        self.buckets.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Whether any indexed word has exactly `len`
    #[inline]
    #[must_use]
    pub fn has_len(&self, len: usize) -> bool {
        self.buckets.contains_key(&len)
    }

    /// The cut-off length the index was built for
    #[inline]
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Total number of indexed words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Populated lengths in ascending order
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::loader::dictionary_from_lines;

    #[test]
    fn buckets_words_by_length() {
        let dictionary = dictionary_from_lines(["a", "bb", "cc", "ddd"]);
        let index = WordIndex::build(&dictionary, 6);

        assert_eq!(index.words_of_len(1).len(), 1);
        assert_eq!(index.words_of_len(2).len(), 2);
        assert_eq!(index.words_of_len(3).len(), 1);
        assert_eq!(index.word_count(), 4);
    }

    #[test]
    fn drops_words_longer_than_max() {
        let dictionary = dictionary_from_lines(["short", "toolongtofit"]);
        let index = WordIndex::build(&dictionary, 6);

        assert_eq!(index.words_of_len(5).len(), 1);
        assert!(index.words_of_len(12).is_empty());
        assert_eq!(index.word_count(), 1);
    }

    #[test]
    fn missing_length_yields_empty_slice() {
        let dictionary = dictionary_from_lines(["abc"]);
        let index = WordIndex::build(&dictionary, 6);

        assert!(index.words_of_len(4).is_empty());
        assert!(!index.has_len(4));
        assert!(index.has_len(3));
    }

    #[test]
    fn buckets_keep_dictionary_order() {
        let dictionary = dictionary_from_lines(["bat", "cat", "ant"]);
        let index = WordIndex::build(&dictionary, 3);

        let texts: Vec<&str> = index.words_of_len(3).iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["bat", "cat", "ant"]);
    }

    #[test]
    fn every_retained_word_lands_in_one_bucket() {
        let dictionary = dictionary_from_lines(["fo", "o", "bar", "foob", "foobar"]);
        let index = WordIndex::build(&dictionary, 6);

        let bucketed: usize = index.lengths().iter().map(|&l| index.words_of_len(l).len()).sum();
        assert_eq!(bucketed, dictionary.len());
    }

    #[test]
    fn empty_dictionary_builds_empty_index() {
        let dictionary = dictionary_from_lines(std::iter::empty::<&str>());
        let index = WordIndex::build(&dictionary, 6);

        assert_eq!(index.word_count(), 0);
        assert!(index.lengths().is_empty());
        assert_eq!(index.max_len(), 6);
    }

    #[test]
    fn lengths_are_ascending() {
        let dictionary = dictionary_from_lines(["ddddd", "a", "ccc"]);
        let index = WordIndex::build(&dictionary, 6);

        assert_eq!(index.lengths(), vec![1, 3, 5]);
    }
}
