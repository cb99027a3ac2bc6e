use std::collections::HashMap;

use crate::core::models::{
    CellKey,
    ReviewItem,
};

/// Persistence seam for per-learner review state. The engine side only
/// defines the record and its transition; storage technology lives with
/// the embedding application. Implementors must make the
/// read-modify-write of a single cell atomic (row transaction or
/// version check), since two concurrent submissions for the same cell
/// must not both transition from the same prior state.
pub trait ReviewItemStore {
    fn get(&self, cell: &CellKey) -> Option<ReviewItem>;
    fn put(&mut self, item: ReviewItem);
    fn items_for_learner(&self, learner_id: &str) -> Vec<ReviewItem>;
}

/// HashMap-backed store for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<CellKey, ReviewItem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl ReviewItemStore for MemoryStore {
    fn get(&self, cell: &CellKey) -> Option<ReviewItem> {
        self.items.get(cell).cloned()
    }

    fn put(&mut self, item: ReviewItem) {
        self.items.insert(item.cell.clone(), item);
    }

    fn items_for_learner(&self, learner_id: &str) -> Vec<ReviewItem> {
        self.items.values().filter(|item| item.cell.learner_id == learner_id).cloned().collect()
    }
}
