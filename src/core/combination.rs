//! Word combination value
//!
//! An ordered sequence of at least two dictionary words whose concatenation
//! forms a longer target word, rendered canonically as `part+part=target`.

use super::Word;
use std::fmt;

/// A split of a target word into dictionary parts
///
/// Immutable once constructed. The parts, in order, concatenate to the
/// target word (case-insensitively); there are always at least two parts.
/// Equality follows `Word` equality and is therefore case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    parts: Vec<Word>,
    target: Word,
}

impl Combination {
    /// Create a combination from its parts and the target word they form
    ///
    /// # Panics
    /// Panics in debug mode if fewer than two parts are given or the parts
    /// do not concatenate to the target. The search only constructs
    /// combinations that satisfy both.
    ///
    /// # Examples
    /// ```
    /// use compound_finder::core::{Combination, Word};
    ///
    /// let combination = Combination::new(
    ///     vec![Word::new("foo").unwrap(), Word::new("bar").unwrap()],
    ///     Word::new("foobar").unwrap(),
    /// );
    /// assert_eq!(combination.to_string(), "foo+bar=foobar");
    /// ```
    #[must_use]
    pub fn new(parts: Vec<Word>, target: Word) -> Self {
        debug_assert!(parts.len() >= 2, "a combination needs at least two parts");
        debug_assert_eq!(
            parts.iter().map(Word::key).collect::<String>(),
            target.key(),
            "parts must concatenate to the target word"
        );

        Self { parts, target }
    }

    /// The parts in order
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[Word] {
        &self.parts
    }

    /// The target word the parts concatenate to
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Number of parts in the split
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parts.len()
    }
}

impl fmt::Display for Combination {
    /// Canonical rendering: parts joined by `+`, then `=`, then the target
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, "={}", self.target)
    }
}
