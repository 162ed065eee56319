//! Combination search
//!
//! The length index, the search modes, and the finder that ties them to a
//! dictionary.

mod engine;
mod index;
mod mode;

pub use engine::CombinationFinder;
pub use index::WordIndex;
pub use mode::SearchMode;
