//! Word list handling
//!
//! The dictionary the search runs against, plus loaders that build it from
//! a file or from lines already in memory.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
