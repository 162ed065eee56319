//! Find command
//!
//! Runs the combination search over every target-length word in the
//! dictionary.

use crate::core::Combination;
use crate::search::{CombinationFinder, SearchMode};
use crate::wordlist::Dictionary;
use std::time::{Duration, Instant};

/// Result of a full dictionary search
pub struct FindResult {
    pub combinations: Vec<Combination>,
    pub target_len: usize,
    pub mode: SearchMode,
    pub dictionary_size: usize,
    pub target_count: usize,
    pub duration: Duration,
}

/// Search `dictionary` for every combination at `target_len`
pub fn run_find(dictionary: &Dictionary, target_len: usize, mode: SearchMode) -> FindResult {
    let start = Instant::now();

    let finder = CombinationFinder::new(dictionary, target_len);
    let target_count = finder.target_words().len();
    let combinations = finder.find(mode);

    FindResult {
        combinations,
        target_len,
        mode,
        dictionary_size: dictionary.len(),
        target_count,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::loader::dictionary_from_lines;

    #[test]
    fn find_reports_combinations_and_counts() {
        let dictionary = dictionary_from_lines(["foobar", "foo", "bar", "fo", "o"]);
        let result = run_find(&dictionary, 6, SearchMode::Exhaustive);

        assert_eq!(result.dictionary_size, 5);
        assert_eq!(result.target_count, 1);
        assert_eq!(result.combinations.len(), 2);
        assert_eq!(result.target_len, 6);
    }

    #[test]
    fn find_respects_the_mode() {
        let dictionary = dictionary_from_lines(["foobar", "foo", "bar", "fo", "o"]);

        let pairs = run_find(&dictionary, 6, SearchMode::TwoWord);
        assert_eq!(pairs.combinations.len(), 1);
        assert_eq!(pairs.mode, SearchMode::TwoWord);

        let all = run_find(&dictionary, 6, SearchMode::Exhaustive);
        assert_eq!(all.combinations.len(), 2);
    }

    #[test]
    fn find_on_empty_dictionary() {
        let dictionary = dictionary_from_lines(std::iter::empty::<&str>());
        let result = run_find(&dictionary, 6, SearchMode::Exhaustive);

        assert_eq!(result.dictionary_size, 0);
        assert_eq!(result.target_count, 0);
        assert!(result.combinations.is_empty());
    }

    #[test]
    fn find_with_no_eligible_targets() {
        let dictionary = dictionary_from_lines(["cat", "dog"]);
        let result = run_find(&dictionary, 6, SearchMode::Exhaustive);

        assert_eq!(result.dictionary_size, 2);
        assert_eq!(result.target_count, 0);
        assert!(result.combinations.is_empty());
    }
}
