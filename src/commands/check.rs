//! Check command
//!
//! Splits a single word against the dictionary instead of scanning every
//! target-length word.

use crate::core::{Combination, Word};
use crate::search::CombinationFinder;
use crate::wordlist::Dictionary;

/// Result of checking one word
pub struct CheckResult {
    pub word: Word,
    pub combinations: Vec<Combination>,
    pub in_dictionary: bool,
}

/// Find every split of `text` into dictionary words
///
/// The word does not have to be in the dictionary and can be any length.
/// When it is in the dictionary, the stored spelling is reported.
///
/// # Errors
///
/// Returns an error if the word is empty, contains whitespace, or contains
/// non-ASCII characters.
pub fn check_word(dictionary: &Dictionary, text: &str) -> Result<CheckResult, String> {
    let probe = Word::new(text).map_err(|e| format!("Invalid word: {e}"))?;

    let (word, in_dictionary) = match dictionary.get(probe.key()) {
        Some(entry) => (entry.clone(), true),
        None => (probe, false),
    };

    let finder = CombinationFinder::new(dictionary, word.len());
    let combinations = finder.combinations_for(&word);

    Ok(CheckResult {
        word,
        combinations,
        in_dictionary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::loader::dictionary_from_lines;

    #[test]
    fn check_splittable_word() {
        let dictionary = dictionary_from_lines(["carpet", "car", "pet"]);
        let result = check_word(&dictionary, "carpet").unwrap();

        assert!(result.in_dictionary);
        assert_eq!(result.combinations.len(), 1);
        assert_eq!(result.combinations[0].to_string(), "car+pet=carpet");
    }

    #[test]
    fn check_word_outside_the_dictionary() {
        let dictionary = dictionary_from_lines(["rain", "bow"]);
        let result = check_word(&dictionary, "rainbow").unwrap();

        assert!(!result.in_dictionary);
        assert_eq!(result.combinations.len(), 1);
        assert_eq!(result.combinations[0].to_string(), "rain+bow=rainbow");
    }

    #[test]
    fn check_word_with_no_splits() {
        let dictionary = dictionary_from_lines(["carpet", "car", "pet"]);
        let result = check_word(&dictionary, "hello").unwrap();

        assert!(!result.in_dictionary);
        assert!(result.combinations.is_empty());
    }

    #[test]
    fn check_uses_the_dictionary_spelling() {
        let dictionary = dictionary_from_lines(["LapTop", "lap", "top"]);
        let result = check_word(&dictionary, "laptop").unwrap();

        assert!(result.in_dictionary);
        assert_eq!(result.word.text(), "LapTop");
        assert_eq!(result.combinations[0].to_string(), "lap+top=LapTop");
    }

    #[test]
    fn check_rejects_invalid_words() {
        let dictionary = dictionary_from_lines(["car", "pet"]);

        assert!(check_word(&dictionary, "").is_err());
        assert!(check_word(&dictionary, "two words").is_err());
        assert!(check_word(&dictionary, "naïve").is_err());
    }

    #[test]
    fn check_ignores_word_length() {
        let dictionary = dictionary_from_lines(["motor", "cycle", "motorcycle"]);
        let result = check_word(&dictionary, "motorcycle").unwrap();

        assert_eq!(result.combinations.len(), 1);
        assert_eq!(result.combinations[0].to_string(), "motor+cycle=motorcycle");
    }
}
