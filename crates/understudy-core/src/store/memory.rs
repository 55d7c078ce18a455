//! Process-local selection store.

use crate::store::{SelectionStore, StoreError};
use crate::types::selection::SelectionMap;

/// In-memory store for tests and sessions that do not need persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    selections: SelectionMap,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self) -> Result<SelectionMap, StoreError> {
        Ok(self.selections.clone())
    }

    fn save(&mut self, selections: &SelectionMap) -> Result<(), StoreError> {
        self.selections = selections.clone();
        Ok(())
    }
}
