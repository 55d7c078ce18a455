//! Core state types.

use crate::types::selection::Selection;
use crate::types::variant::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verb for interception matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Default for Verb {
    fn default() -> Self {
        Verb::Get
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
            Verb::Options => "OPTIONS",
        })
    }
}

/// Catalog entry for one mocked endpoint.
///
/// A state with no `url` is pure bookkeeping and never participates in
/// interception. An unset `verb` defaults to GET at binding time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct State {
    /// Unique identifier for this state, the catalog's primary key
    pub name: String,
    /// URL pattern matched against outgoing requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// HTTP verb matched against outgoing requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<Verb>,
    /// Response variants, in declaration order, unique by name
    pub variants: Vec<Variant>,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            verb: None,
            variants: Vec::new(),
        }
    }

    /// Look up a variant by name.
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Derive the view of this state under `selection`.
    ///
    /// With no record the first variant is the implicit current one but the
    /// state is inactive. A record naming a variant missing from the list
    /// derives as inactive, so `active` always implies a resolvable variant.
    pub fn view(&self, selection: Option<&Selection>) -> StateView {
        let (active, active_variant) = match selection {
            Some(selection) => {
                let found = self.variant(&selection.variant).cloned();
                (selection.active && found.is_some(), found)
            }
            None => (false, self.variants.first().cloned()),
        };

        StateView {
            name: self.name.clone(),
            url: self.url.clone(),
            verb: self.verb,
            variants: self.variants.clone(),
            active,
            active_variant,
        }
    }
}

/// Snapshot of a state with its selection freshly resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<Verb>,
    pub variants: Vec<Variant>,
    /// Whether the state currently overrides matching requests
    pub active: bool,
    /// The variant served while active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_variant: Option<Variant>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::variant::Body;
    use rstest::rstest;
    use serde_json::json;

    fn state_with_variants(names: &[&str]) -> State {
        let mut state = State::new("users");
        state.url = Some("/api/users".to_string());
        for name in names {
            state.variants.push(Variant {
                name: (*name).to_string(),
                status: 200,
                body: Body::default(),
                delay_ms: 0,
            });
        }
        state
    }

    #[rstest]
    #[case(Verb::Get, "\"GET\"")]
    #[case(Verb::Post, "\"POST\"")]
    #[case(Verb::Delete, "\"DELETE\"")]
    fn test_verb_serializes_uppercase(#[case] verb: Verb, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&verb).unwrap(), expected);
        let roundtripped: Verb = serde_json::from_str(expected).unwrap();
        assert_eq!(roundtripped, verb);
    }

    #[rstest]
    fn test_verb_default_is_get() {
        assert_eq!(Verb::default(), Verb::Get);
    }

    #[rstest]
    fn test_view_without_selection() {
        let state = state_with_variants(&["empty", "error"]);
        let view = state.view(None);

        assert!(!view.active);
        // First variant is the implicit current one, but nothing is served.
        assert_eq!(view.active_variant.unwrap().name, "empty");
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn test_view_with_selection(#[case] active: bool) {
        let state = state_with_variants(&["empty", "error"]);
        let selection = Selection {
            variant: "error".to_string(),
            active,
        };

        let view = state.view(Some(&selection));

        assert_eq!(view.active, active);
        assert_eq!(view.active_variant.unwrap().name, "error");
    }

    #[rstest]
    fn test_view_with_dangling_selection_derives_inactive() {
        let state = state_with_variants(&["empty"]);
        let selection = Selection {
            variant: "removed".to_string(),
            active: true,
        };

        let view = state.view(Some(&selection));

        assert!(!view.active);
        assert!(view.active_variant.is_none());
    }

    #[rstest]
    fn test_view_of_empty_state() {
        let state = State::new("bare");
        let view = state.view(None);

        assert!(!view.active);
        assert!(view.active_variant.is_none());
        assert!(view.variants.is_empty());
    }

    #[rstest]
    fn test_state_view_serializes_resolved_fields() {
        let mut state = state_with_variants(&["empty"]);
        state.variants[0].body = Body::from(json!([]));
        let view = state.view(Some(&Selection {
            variant: "empty".to_string(),
            active: true,
        }));

        let serialized = serde_json::to_value(&view).unwrap();
        assert_eq!(serialized["active"], json!(true));
        assert_eq!(serialized["active_variant"]["name"], json!("empty"));
        assert_eq!(serialized["active_variant"]["body"], json!([]));
    }
}
