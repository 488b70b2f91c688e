//! titlesearch-text
//!
//! Fuzzy title scoring and the debounced query pipeline built on it. See
//! `score` for the relevance formula and `pipeline` for the query lifecycle.

pub mod debounce;
pub mod ngram;
pub mod pipeline;
pub mod rank;
pub mod score;

pub use debounce::Debouncer;
pub use pipeline::{QueryState, SearchPipeline};
pub use rank::rank;
pub use score::{fuzzy_score, FuzzyScorer};
