//! Canonical catalog of mock states and the operations that mutate it.

use crate::intercept::Interceptor;
use crate::mocks::engine::SyncEngine;
use crate::store::SelectionStore;
use crate::types::selection::{Selection, SelectionMap};
use crate::types::spec::StateSpec;
use crate::types::state::{State, StateView, Verb};
use crate::types::variant::{Body, Variant};
use thiserror::Error;
use tracing::warn;

/// Errors from registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Upsert without a state name. The catalog is left unchanged.
    #[error("cannot upsert: state name is mandatory")]
    MissingStateName,
    /// Selection targeted a state that was never declared.
    #[error("unknown state '{name}'")]
    StateNotFound { name: String },
    /// Selection targeted a variant missing from the state's list.
    #[error("state '{state}' has no variant '{variant}'")]
    VariantNotFound { state: String, variant: String },
}

/// One upsert: declares or updates a state and exactly one of its variants.
///
/// Defaults mirror a bare declaration: status 200, empty-object body, no
/// delay. Use struct-update syntax for the rest:
///
/// ```
/// use understudy_core::UpsertSpec;
///
/// let spec = UpsertSpec {
///     state: "users".into(),
///     url: Some("/api/users".into()),
///     name: "empty".into(),
///     ..UpsertSpec::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct UpsertSpec {
    /// Name of the state to find or create (mandatory)
    pub state: String,
    /// URL pattern; only overwrites an existing state's URL when non-empty
    pub url: Option<String>,
    /// Verb; only overwrites an existing state's verb when present
    pub verb: Option<Verb>,
    /// Name of the variant to find or replace
    pub name: String,
    pub status: u16,
    pub body: Body,
    pub delay_ms: u64,
}

impl Default for UpsertSpec {
    fn default() -> Self {
        Self {
            state: String::new(),
            url: None,
            verb: None,
            name: String::new(),
            status: 200,
            body: Body::default(),
            delay_ms: 0,
        }
    }
}

/// In-memory catalog of states plus the persistence and synchronization
/// glue around it.
///
/// The registry owns nothing global: construct one per test fixture or one
/// per process, as needed. The catalog is the source of truth for what
/// exists; the [`SelectionStore`] is the source of truth for what is
/// selected. Every mutating operation ends with a synchronization pass, so
/// the interceptor is fully reconciled by the time the call returns.
pub struct Registry {
    catalog: Vec<State>,
    store: Box<dyn SelectionStore>,
    engine: SyncEngine,
}

impl Registry {
    pub fn new(store: Box<dyn SelectionStore>, interceptor: Box<dyn Interceptor>) -> Self {
        Self {
            catalog: Vec::new(),
            store,
            engine: SyncEngine::new(interceptor),
        }
    }

    /// Insert or update a state and one of its variants.
    ///
    /// State-level fields merge (last non-empty value wins); the named
    /// variant is replaced wholesale. States and variants are created on
    /// first sight and never removed.
    pub fn upsert(&mut self, spec: UpsertSpec) -> Result<(), RegistryError> {
        if spec.state.is_empty() {
            warn!("cannot upsert: state name is mandatory");
            return Err(RegistryError::MissingStateName);
        }

        let index = match self.catalog.iter().position(|s| s.name == spec.state) {
            Some(index) => index,
            None => {
                self.catalog.push(State::new(spec.state.clone()));
                self.catalog.len() - 1
            }
        };

        let state = &mut self.catalog[index];
        if let Some(url) = spec.url.filter(|u| !u.is_empty()) {
            state.url = Some(url);
        }
        if spec.verb.is_some() {
            state.verb = spec.verb;
        }

        let variant = Variant {
            name: spec.name,
            status: spec.status,
            body: spec.body,
            delay_ms: spec.delay_ms,
        };
        match state.variants.iter_mut().find(|v| v.name == variant.name) {
            Some(existing) => *existing = variant,
            None => state.variants.push(variant),
        }

        self.sync();
        Ok(())
    }

    /// Apply upserts in order. Fails fast; prior items stay applied.
    pub fn upsert_many(&mut self, specs: Vec<UpsertSpec>) -> Result<(), RegistryError> {
        for spec in specs {
            self.upsert(spec)?;
        }
        Ok(())
    }

    /// Declare a state and all its variants in one call.
    ///
    /// Expands into one upsert per variant, preserving declaration order. A
    /// variant-level verb wins over the state-level one.
    pub fn add_state(&mut self, spec: StateSpec) -> Result<(), RegistryError> {
        for option in spec.options {
            self.upsert(UpsertSpec {
                state: spec.name.clone(),
                url: spec.url.clone(),
                verb: option.verb.or(spec.verb),
                name: option.name,
                status: option.status,
                body: option.body,
                delay_ms: option.delay_ms,
            })?;
        }
        Ok(())
    }

    /// Apply state specs in order. Fails fast; prior items stay applied.
    pub fn add_states(&mut self, specs: Vec<StateSpec>) -> Result<(), RegistryError> {
        for spec in specs {
            self.add_state(spec)?;
        }
        Ok(())
    }

    /// Record which variant is selected for a state and whether it is
    /// served, then synchronize.
    ///
    /// Both names are validated eagerly so a typo surfaces here instead of
    /// silently serving nothing.
    pub fn set_selection(
        &mut self,
        state: &str,
        variant: &str,
        active: bool,
    ) -> Result<(), RegistryError> {
        let known = self
            .catalog
            .iter()
            .find(|s| s.name == state)
            .ok_or_else(|| RegistryError::StateNotFound {
                name: state.to_string(),
            })?;
        if known.variant(variant).is_none() {
            return Err(RegistryError::VariantNotFound {
                state: state.to_string(),
                variant: variant.to_string(),
            });
        }

        let mut selections = self.selections();
        selections.insert(
            state.to_string(),
            Selection {
                variant: variant.to_string(),
                active,
            },
        );
        self.persist(&selections);
        self.sync();
        Ok(())
    }

    /// Turn every persisted selection inactive, then synchronize. All
    /// requests pass through afterwards.
    pub fn deactivate_all(&mut self) {
        let mut selections = self.selections();
        for selection in selections.values_mut() {
            selection.active = false;
        }
        self.persist(&selections);
        self.sync();
    }

    /// Snapshot of every state with `active`/`active_variant` freshly
    /// derived from the persisted selection. Pure read; calling it twice
    /// without an intervening mutation yields identical results.
    pub fn fetch_states(&self) -> Vec<StateView> {
        let selections = self.selections();
        self.catalog
            .iter()
            .map(|state| state.view(selections.get(&state.name)))
            .collect()
    }

    /// The variant currently served for `state`, or `None` when the state
    /// is inactive or unknown.
    pub fn active_variant(&self, state: &str) -> Option<Variant> {
        self.fetch_states()
            .into_iter()
            .find(|view| view.name == state)
            .filter(|view| view.active)
            .and_then(|view| view.active_variant)
    }

    fn sync(&mut self) {
        let views = self.fetch_states();
        self.engine.apply(&views);
    }

    fn selections(&self) -> SelectionMap {
        match self.store.load() {
            Ok(selections) => selections,
            Err(e) => {
                warn!("selection store read failed, treating as empty: {}", e);
                SelectionMap::new()
            }
        }
    }

    fn persist(&mut self, selections: &SelectionMap) {
        if let Err(e) = self.store.save(selections) {
            warn!("selection store write failed, selection not persisted: {}", e);
        }
    }
}
