//! Dictionary word representation
//!
//! A Word keeps the casing it had in the source word list while comparing
//! and hashing case-insensitively via a normalized lowercase key.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A dictionary word with case-insensitive identity
///
/// Stores the original text alongside its ASCII-lowercase key. All equality
/// and hashing go through the key, so `Word::new("TOP")` and
/// `Word::new("top")` are the same word; display and rendering keep the
/// original casing.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    key: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    Whitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII characters"),
            Self::Whitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed input:
    /// - Is empty
    /// - Contains non-ASCII characters (splitting works on byte offsets,
    ///   which only line up with characters for ASCII)
    /// - Contains interior whitespace
    ///
    /// # Examples
    /// ```
    /// use compound_finder::core::Word;
    ///
    /// let word = Word::new("  Foobar ").unwrap();
    /// assert_eq!(word.text(), "Foobar");
    /// assert_eq!(word.key(), "foobar");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if trimmed.bytes().any(|b| b.is_ascii_whitespace()) {
            return Err(WordError::Whitespace);
        }

        Ok(Self {
            text: trimmed.to_string(),
            key: trimmed.to_ascii_lowercase(),
        })
    }

    /// Get the word as it appeared in the source list
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the normalized lowercase key used for comparisons
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Length in characters (equal to bytes, since words are ASCII)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Always false: construction rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

// Identity is the normalized key; "TOP" and "top" are one word.
impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("foobar").unwrap();
        assert_eq!(word.text(), "foobar");
        assert_eq!(word.key(), "foobar");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_trims() {
        let word = Word::new("  bar\t").unwrap();
        assert_eq!(word.text(), "bar");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_preserves_casing() {
        let word = Word::new("LapTop").unwrap();
        assert_eq!(word.text(), "LapTop");
        assert_eq!(word.key(), "laptop");
        assert_eq!(format!("{word}"), "LapTop");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("\t\n"), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_non_ascii() {
        assert_eq!(Word::new("naïve"), Err(WordError::NonAscii));
        assert_eq!(Word::new("日本語"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_interior_whitespace() {
        assert_eq!(Word::new("two words"), Err(WordError::Whitespace));
        assert_eq!(Word::new("tab\tbed"), Err(WordError::Whitespace));
    }

    #[test]
    fn word_equality_case_insensitive() {
        let lower = Word::new("helmet").unwrap();
        let upper = Word::new("HELMET").unwrap();
        let mixed = Word::new("HelMet").unwrap();
        let other = Word::new("carpet").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_ne!(lower, other);
    }

    #[test]
    fn word_hash_follows_equality() {
        let mut set = HashSet::new();
        set.insert(Word::new("Top").unwrap());

        assert!(set.contains(&Word::new("TOP").unwrap()));
        assert!(set.contains(&Word::new("top").unwrap()));
        assert!(!set.contains(&Word::new("tip").unwrap()));
    }

    #[test]
    fn word_error_display() {
        assert_eq!(WordError::Empty.to_string(), "Word must not be empty");
        assert_eq!(
            WordError::Whitespace.to_string(),
            "Word must not contain whitespace"
        );
    }
}
