//! Search mode selection

use std::fmt;

/// Which combination search to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Splits into exactly two parts
    TwoWord,
    /// Splits into any number of parts, two or more
    #[default]
    Exhaustive,
}

impl SearchMode {
    /// Create a mode from a name
    ///
    /// Accepts "two", "two-word", "two_word", or "pairs" for the two-word
    /// search. Any other name falls back to the exhaustive search.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "two" | "two-word" | "two_word" | "pairs" => Self::TwoWord,
            _ => Self::Exhaustive,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TwoWord => "two-word",
            Self::Exhaustive => "exhaustive",
        };
        write!(f, "{name}")
    }
}
