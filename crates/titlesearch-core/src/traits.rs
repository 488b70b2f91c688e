use crate::error::Result;
use crate::types::{Item, ScoredResult};

/// Relevance of a title for a query. Higher is better; zero means no match.
pub trait Scorer: Send + Sync {
    fn score(&self, query: &str, target: &str) -> usize;
}

/// Query-as-you-type surface consumed by front ends.
///
/// `set_query` only records input; results change when `poll` commits it.
pub trait SearchEngine {
    fn load_corpus(&mut self, items: Vec<Item>) -> Result<()>;
    fn set_query(&mut self, raw: &str);
    fn poll(&mut self) -> bool;
    fn current_results(&self) -> &[ScoredResult];
}
