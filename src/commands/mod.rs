//! Command implementations

pub mod check;
pub mod find;
pub mod stats;

pub use check::{CheckResult, check_word};
pub use find::{FindResult, run_find};
pub use stats::{StatsReport, run_stats};
