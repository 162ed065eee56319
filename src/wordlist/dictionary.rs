//! Case-insensitive word dictionary
//!
//! Holds the deduplicated word list in insertion order and answers
//! membership queries through a normalized-key map.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// The word dictionary the search runs against
///
/// Words compare case-insensitively; the first spelling seen wins and later
/// case-variants collapse onto it. Iteration yields words in insertion
/// order, which keeps search results deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Word>,
    by_key: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from words, collapsing case-insensitive duplicates
    ///
    /// # Examples
    /// ```
    /// use compound_finder::core::Word;
    /// use compound_finder::wordlist::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(
    ///     ["TOP", "top", "lap"].iter().map(|w| Word::new(*w).unwrap()),
    /// );
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.get("Top").unwrap().text(), "TOP");
    /// ```
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word);
        }
        dictionary
    }

    /// Insert a word
    ///
    /// Returns false when a case-insensitive duplicate is already present;
    /// the existing spelling is kept.
    pub fn insert(&mut self, word: Word) -> bool {
        if self.by_key.contains_key(word.key()) {
            return false;
        }

        self.by_key.insert(word.key().to_string(), self.entries.len());
        self.entries.push(word);
        true
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.by_key.contains_key(normalized(text).as_ref())
    }

    /// Look up the stored entry for any casing of `text`
    ///
    /// Returns the word with the casing it had in the source list.
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.by_key
            .get(normalized(text).as_ref())
            .map(|&index| &self.entries[index])
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter()
    }
}

// Lowercase only when needed. The search probes slices of already-normalized
// target keys, so the hot path stays allocation-free.
fn normalized(text: &str) -> Cow<'_, str> {
    if text.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(text.to_ascii_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}
