//! The ordered collection of searchable items.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::types::Item;

/// Number of entries in the built-in demo catalog.
pub const DEMO_SIZE: usize = 15;

/// An ordered sequence of items with unique ids.
///
/// The position of an item is its canonical index; scoring ignores it but
/// every `ScoredResult` carries it back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    items: Vec<Item>,
}

impl Corpus {
    /// Build a corpus, rejecting the first repeated id.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if let Some(&first) = seen.get(item.id.as_str()) {
                return Err(Error::DuplicateId { id: item.id.clone(), first, second: i });
            }
            seen.insert(&item.id, i);
        }
        Ok(Self { items })
    }

    /// Read a JSON array of `{"id": ..., "title": ...}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let raw = fs::read_to_string(path)?;
        let corpus = Self::from_json_str(&raw)?;
        info!(path = %path.display(), items = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(raw)?;
        Self::new(items)
    }

    /// `game-1`/`Game 1` through `game-n`/`Game n`.
    pub fn demo(count: usize) -> Self {
        let items = (1..=count).map(|i| Item::new(format!("game-{i}"), format!("Game {i}"))).collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] { &self.items }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}
