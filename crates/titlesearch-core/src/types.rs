//! Domain types shared by the scorer, the pipeline and front ends.

use serde::{Deserialize, Serialize};

pub type ItemId = String;

/// A searchable catalog entry.
///
/// - `id`: stable identity, unique within a corpus
/// - `title`: display string the query is matched against (need not be unique)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into() }
    }
}

/// One ranked hit.
///
/// `original_index` is the item's position in the corpus, so a caller can
/// jump to it without searching again. `score` is zero for every item when
/// the query is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub item: Item,
    pub original_index: usize,
    pub score: usize,
}

impl ScoredResult {
    /// Row tint strength in `[0, 1]`; saturates at a score of 10.
    pub fn highlight_intensity(&self) -> f32 {
        (self.score as f32 / 10.0).min(1.0)
    }
}

/// Ordered, capped result list. Best match first.
pub type RankedList = Vec<ScoredResult>;
