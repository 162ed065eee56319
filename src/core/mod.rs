//! Core domain types
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, immutable values with clear invariants.

mod combination;
mod word;

pub use combination::Combination;
pub use word::{Word, WordError};
