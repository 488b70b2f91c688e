use std::time::Instant;

use tracing::{debug, info};

use titlesearch_core::config::SearchSettings;
use titlesearch_core::traits::{Scorer, SearchEngine};
use titlesearch_core::types::{Item, RankedList, ScoredResult};
use titlesearch_core::{Corpus, Result};

use crate::debounce::Debouncer;
use crate::rank::rank;
use crate::score::FuzzyScorer;

/// Where the query lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
	/// Input was set but its debounce window has not elapsed yet.
	Pending,
	/// Results reflect the latest input.
	Committed,
}

/// Debounced search over an in-memory corpus.
///
/// Raw input goes through `set_query`; it becomes the committed query only
/// after a quiet debounce window, observed by `poll`. `current_results`
/// always reflects the committed query, never pending input.
pub struct SearchPipeline<S: Scorer = FuzzyScorer> {
	scorer: S,
	corpus: Corpus,
	debouncer: Debouncer<String>,
	committed: String,
	results: RankedList,
	max_results: usize,
	recomputations: u64,
}

impl SearchPipeline<FuzzyScorer> {
	pub fn new(settings: &SearchSettings) -> Self { Self::with_scorer(FuzzyScorer, settings) }
}

impl Default for SearchPipeline<FuzzyScorer> {
	fn default() -> Self { Self::new(&SearchSettings::default()) }
}

impl<S: Scorer> SearchPipeline<S> {
	pub fn with_scorer(scorer: S, settings: &SearchSettings) -> Self {
		Self {
			scorer,
			corpus: Corpus::default(),
			debouncer: Debouncer::new(settings.debounce_window()),
			committed: String::new(),
			results: Vec::new(),
			max_results: settings.max_results,
			recomputations: 0,
		}
	}

	/// Validate `items` and install them; see `set_corpus`.
	pub fn load_corpus(&mut self, items: Vec<Item>) -> Result<()> {
		self.set_corpus(Corpus::new(items)?);
		Ok(())
	}

	/// Replace the corpus and rescore it against the committed query.
	/// Pending input stays pending.
	pub fn set_corpus(&mut self, corpus: Corpus) {
		info!(items = corpus.len(), "corpus installed");
		self.corpus = corpus;
		self.recompute();
	}

	pub fn corpus(&self) -> &Corpus { &self.corpus }

	pub fn set_query(&mut self, raw: &str) { self.set_query_at(raw, Instant::now()); }

	/// Record keystroke input at `now`. Cancels any pending input.
	pub fn set_query_at(&mut self, raw: &str, now: Instant) {
		if let Some(stale) = self.debouncer.submit(raw.to_string(), now) {
			debug!(stale = %stale, query = raw, "pending query replaced");
		} else {
			debug!(query = raw, "query pending");
		}
	}

	pub fn poll(&mut self) -> bool { self.poll_at(Instant::now()) }

	/// Commit pending input whose window has elapsed by `now`.
	/// Returns true when a query was committed.
	pub fn poll_at(&mut self, now: Instant) -> bool {
		match self.debouncer.poll(now) {
			Some(query) => {
				self.commit(query);
				true
			}
			None => false,
		}
	}

	/// Commit pending input immediately, skipping the rest of the window.
	pub fn flush(&mut self) -> bool {
		match self.debouncer.flush() {
			Some(query) => {
				self.commit(query);
				true
			}
			None => false,
		}
	}

	pub fn state(&self) -> QueryState {
		if self.debouncer.is_pending() { QueryState::Pending } else { QueryState::Committed }
	}

	pub fn committed_query(&self) -> &str { &self.committed }

	pub fn pending_query(&self) -> Option<&str> { self.debouncer.pending().map(String::as_str) }

	/// Earliest instant at which `poll_at` will commit pending input.
	pub fn deadline(&self) -> Option<Instant> { self.debouncer.deadline() }

	pub fn current_results(&self) -> &[ScoredResult] { &self.results }

	/// How many times the corpus has been rescored.
	pub fn recomputations(&self) -> u64 { self.recomputations }

	fn commit(&mut self, query: String) {
		if query == self.committed {
			debug!(query = %query, "committed query unchanged");
			return;
		}
		debug!(query = %query, "query committed");
		self.committed = query;
		self.recompute();
	}

	fn recompute(&mut self) {
		self.results = rank(&self.scorer, self.corpus.items(), &self.committed, self.max_results);
		self.recomputations += 1;
	}
}

impl<S: Scorer> SearchEngine for SearchPipeline<S> {
	fn load_corpus(&mut self, items: Vec<Item>) -> Result<()> { Self::load_corpus(self, items) }
	fn set_query(&mut self, raw: &str) { Self::set_query(self, raw) }
	fn poll(&mut self) -> bool { Self::poll(self) }
	fn current_results(&self) -> &[ScoredResult] { Self::current_results(self) }
}
