//! Stats command
//!
//! Summarizes the shape of a loaded dictionary: how many words there are at
//! each length and how many are usable at the configured target length.

use crate::wordlist::Dictionary;
use rustc_hash::FxHashMap;

/// Summary of a dictionary's length distribution
pub struct StatsReport {
    pub total_words: usize,
    pub target_len: usize,
    pub target_count: usize,
    pub part_candidates: usize,
    pub length_counts: Vec<(usize, usize)>,
}

/// Build the length distribution report for `dictionary`
pub fn run_stats(dictionary: &Dictionary, target_len: usize) -> StatsReport {
    let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
    for word in dictionary.iter() {
        *counts.entry(word.len()).or_insert(0) += 1;
    }

    let mut length_counts: Vec<(usize, usize)> = counts.into_iter().collect();
    length_counts.sort_unstable_by_key(|&(len, _)| len);

    let target_count = length_counts
        .iter()
        .find(|&&(len, _)| len == target_len)
        .map_or(0, |&(_, count)| count);

    // Words strictly shorter than the target are the only possible parts.
    let part_candidates = length_counts
        .iter()
        .filter(|&&(len, _)| len < target_len)
        .map(|&(_, count)| count)
        .sum();

    StatsReport {
        total_words: dictionary.len(),
        target_len,
        target_count,
        part_candidates,
        length_counts,
    }
}
