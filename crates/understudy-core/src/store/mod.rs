//! Durable persistence for variant selections.
//!
//! The catalog is rebuilt by the caller on every start; the selection map is
//! what survives restarts. Any store failure degrades to "no selection" at
//! the registry, so a broken store never reaches the caller.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::types::selection::SelectionMap;
use thiserror::Error;

/// Errors from reading or writing the selection store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read selection store: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write selection store: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to encode selections: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Durable key/value store holding the full selection map as one record.
pub trait SelectionStore: Send {
    /// Read the persisted selection map. An absent record is an empty map.
    fn load(&self) -> Result<SelectionMap, StoreError>;

    /// Replace the persisted selection map.
    fn save(&mut self, selections: &SelectionMap) -> Result<(), StoreError>;
}
