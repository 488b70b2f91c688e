use tracing::{debug, warn};

use titlesearch_core::traits::Scorer;
use titlesearch_core::types::{Item, RankedList, ScoredResult};

/// Score, filter, sort and cap `items` for `query`.
///
/// An empty query keeps every item (all at score 0); otherwise only
/// positive scores survive. Order is score descending, then title ascending
/// by ordinal comparison; equal titles keep corpus order.
pub fn rank<S: Scorer + ?Sized>(scorer: &S, items: &[Item], query: &str, max_results: usize) -> RankedList {
	let keep_all = query.is_empty();
	let mut results: RankedList = items
		.iter()
		.enumerate()
		.map(|(original_index, item)| ScoredResult { item: item.clone(), original_index, score: scorer.score(query, &item.title) })
		.filter(|r| keep_all || r.score > 0)
		.collect();
	let matched = results.len();

	results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.item.title.cmp(&b.item.title)));
	if results.len() > max_results {
		warn!(query, matched, max_results, "result list truncated");
		results.truncate(max_results);
	}
	debug!(query, corpus = items.len(), matched, kept = results.len(), "ranked");
	results
}
