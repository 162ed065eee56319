//! Word list loading
//!
//! Provides the file-based word source and an in-memory one for callers
//! that already hold their words. Tests substitute the in-memory source.

use super::Dictionary;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a one-word-per-line text file
///
/// Lines are trimmed; blank and whitespace-only lines are skipped, as are
/// lines that do not parse as words. Case-insensitive duplicates collapse
/// onto the first spelling seen.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened; a missing
/// file surfaces as `io::ErrorKind::NotFound` before any search runs.
///
/// # Examples
/// ```no_run
/// use compound_finder::wordlist::loader::load_from_file;
///
/// let dictionary = load_from_file("input.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(dictionary_from_lines(content.lines()))
}

/// Build a dictionary from in-memory lines
///
/// The in-memory counterpart of [`load_from_file`], applying the same
/// trimming, skipping, and deduplication rules.
///
/// # Examples
/// ```
/// use compound_finder::wordlist::loader::dictionary_from_lines;
///
/// let dictionary = dictionary_from_lines(["foobar", "fo", "o", "bar"]);
/// assert_eq!(dictionary.len(), 4);
/// ```
pub fn dictionary_from_lines<'s, I>(lines: I) -> Dictionary
where
    I: IntoIterator<Item = &'s str>,
{
    Dictionary::from_words(lines.into_iter().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Word::new(trimmed).ok()
        }
    }))
}
