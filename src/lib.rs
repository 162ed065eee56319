//! Compound word finder
//!
//! Finds every way a longer word can be written as a concatenation of two or
//! more smaller words from the same word list.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use compound_finder::search::{CombinationFinder, SearchMode};
//! use compound_finder::wordlist::loader::load_from_file;
//!
//! let dictionary = load_from_file("input.txt").unwrap();
//! let finder = CombinationFinder::new(&dictionary, 6);
//!
//! for combination in finder.find(SearchMode::Exhaustive) {
//!     println!("{combination}");
//! }
//! ```

// Core domain types
pub mod core;

// Word list loading and lookup
pub mod wordlist;

// Combination search
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
