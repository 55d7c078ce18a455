//! File-backed selection store.

use crate::store::{SelectionStore, StoreError};
use crate::types::selection::SelectionMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::warn;

/// Stores the selection map as one JSON file.
///
/// An absent file reads as an empty map. A file that no longer parses also
/// reads as an empty map: the store is a best-effort developer aid, and a
/// corrupted record must never take the engine down with it.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SelectionStore for FileStore {
    fn load(&self) -> Result<SelectionMap, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SelectionMap::new()),
            Err(e) => return Err(StoreError::Read(e)),
        };

        match serde_json::from_str(&content) {
            Ok(selections) => Ok(selections),
            Err(e) => {
                warn!(
                    "selection store at {} is corrupted, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(SelectionMap::new())
            }
        }
    }

    fn save(&mut self, selections: &SelectionMap) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(selections).map_err(StoreError::Encode)?;
        fs::write(&self.path, content).map_err(StoreError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::selection::Selection;
    use rstest::rstest;

    #[rstest]
    fn test_absent_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("selections.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[rstest]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("selections.json"));

        let mut selections = SelectionMap::new();
        selections.insert(
            "users".to_string(),
            Selection {
                variant: "error".to_string(),
                active: true,
            },
        );
        selections.insert(
            "posts".to_string(),
            Selection {
                variant: "empty".to_string(),
                active: false,
            },
        );

        store.save(&selections).unwrap();

        assert_eq!(store.load().unwrap(), selections);
    }

    #[rstest]
    #[case("not json at all")]
    #[case("{\"users\": {\"variant\": 42}}")]
    #[case("[1, 2, 3]")]
    fn test_corrupted_file_reads_as_empty(#[case] content: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selections.json");
        fs::write(&path, content).unwrap();

        let store = FileStore::new(&path);

        assert!(store.load().unwrap().is_empty());
    }

    #[rstest]
    fn test_save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("selections.json"));

        let mut first = SelectionMap::new();
        first.insert(
            "users".to_string(),
            Selection {
                variant: "empty".to_string(),
                active: true,
            },
        );
        store.save(&first).unwrap();
        store.save(&SelectionMap::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }
}
