//! Declarative state specs accepted by the registry and by config files.

use crate::types::state::Verb;
use crate::types::variant::Body;
use serde::{Deserialize, Serialize};

fn default_status() -> u16 {
    200
}

/// Declares one state and its variants in a single block.
///
/// Expanded by the registry into one upsert per variant, preserving order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Fallback verb for variants that do not declare their own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<Verb>,
    #[serde(default)]
    pub options: Vec<VariantSpec>,
}

/// Declares one response variant within a [`StateSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<Verb>,
    #[serde(default = "default_status")]
    pub status: u16,
    #[serde(default)]
    pub body: Body,
    #[serde(default)]
    pub delay_ms: u64,
}
