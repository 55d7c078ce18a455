//! Persisted selection records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Persisted choice of which variant is active for one state.
///
/// A record exists only for states that have been toggled at least once;
/// an absent record means inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Name of the chosen variant
    pub variant: String,
    /// Whether the chosen variant is currently served
    pub active: bool,
}

/// Full persisted mapping of state name to selection record.
pub type SelectionMap = HashMap<String, Selection>;
