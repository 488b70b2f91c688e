//! Prefix + substring + bigram-overlap relevance.
//!
//! For a non-empty query `q` and target `t`, both lower-cased:
//!
//! - `2 * len(q)` when `t` starts with `q`
//! - `len(q)` when `t` contains `q` (so a prefix hit earns both)
//! - `+1` per distinct bigram of `q` also present in `t`
//!
//! Lengths count characters. An empty query scores 0 against everything.

use titlesearch_core::traits::Scorer;

use crate::ngram::{bigrams, shared_bigrams};

pub const PREFIX_WEIGHT: usize = 2;
pub const SUBSTRING_WEIGHT: usize = 1;

/// The reference `Scorer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyScorer;

impl Scorer for FuzzyScorer {
    fn score(&self, query: &str, target: &str) -> usize { fuzzy_score(query, target) }
}

pub fn fuzzy_score(query: &str, target: &str) -> usize {
    if query.is_empty() {
        return 0;
    }
    let q = query.to_lowercase();
    let t = target.to_lowercase();
    let q_len = q.chars().count();

    let mut score = 0;
    if t.starts_with(&q) {
        score += PREFIX_WEIGHT * q_len;
    }
    if t.contains(&q) {
        score += SUBSTRING_WEIGHT * q_len;
    }
    score + shared_bigrams(&bigrams(&q), &bigrams(&t))
}
