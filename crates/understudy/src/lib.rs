//! Embedder-facing API for Understudy.
//!
//! Wraps the core [`Registry`] in a thread-safe handle so a toggle UI, a
//! test harness, and the host's transport layer can share one instance.
//! Every public operation takes the lock once, so catalog mutation,
//! persistence, and resynchronization happen as one atomic unit even with
//! concurrent callers.
//!
//! ```
//! use understudy::{Understudy, Outcome, UpsertSpec, Verb};
//!
//! let mocks = Understudy::in_memory();
//! mocks
//!     .upsert(UpsertSpec {
//!         state: "users".into(),
//!         url: Some("/api/users".into()),
//!         name: "empty".into(),
//!         body: serde_json::json!([]).into(),
//!         ..UpsertSpec::default()
//!     })
//!     .unwrap();
//! mocks.set_selection("users", "empty", true).unwrap();
//!
//! assert!(matches!(
//!     mocks.dispatch(Verb::Get, "/api/users"),
//!     Outcome::Mock(_)
//! ));
//! ```

use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use understudy_core::{
    Body, ConfigError, FileStore, InterceptorHub, MemoryStore, MockResponse, Outcome, Registry,
    RegistryError, Selection, SelectionMap, SelectionStore, StateSpec, StateView, StoreError,
    UpsertSpec, Variant, VariantSpec, Verb,
};

/// Errors surfaced while setting up or mutating an [`Understudy`] instance.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Thread-safe handle over a core [`Registry`] and its interception table.
///
/// Clones share the same registry and table.
#[derive(Clone)]
pub struct Understudy {
    registry: Arc<Mutex<Registry>>,
    hub: InterceptorHub,
}

impl Understudy {
    /// Create an instance backed by `store`, using the bundled in-memory
    /// interception table.
    pub fn new(store: Box<dyn SelectionStore>) -> Self {
        let hub = InterceptorHub::new();
        let registry = Registry::new(store, Box::new(hub.clone()));
        Self {
            registry: Arc::new(Mutex::new(registry)),
            hub,
        }
    }

    /// Create an instance with no persistence at all. Selections last for
    /// the lifetime of the process.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Create an instance and declare every state found in files matching
    /// `states_pattern` (YAML or JSON, see [`understudy_core::config`]).
    pub fn from_config(states_pattern: &str, store: Box<dyn SelectionStore>) -> Result<Self, Error> {
        let specs = understudy_core::config::load_states(states_pattern)?;
        let instance = Self::new(store);
        instance.add_states(specs)?;
        Ok(instance)
    }

    pub fn upsert(&self, spec: UpsertSpec) -> Result<(), RegistryError> {
        self.registry.lock().unwrap().upsert(spec)
    }

    pub fn upsert_many(&self, specs: Vec<UpsertSpec>) -> Result<(), RegistryError> {
        self.registry.lock().unwrap().upsert_many(specs)
    }

    pub fn add_state(&self, spec: StateSpec) -> Result<(), RegistryError> {
        self.registry.lock().unwrap().add_state(spec)
    }

    pub fn add_states(&self, specs: Vec<StateSpec>) -> Result<(), RegistryError> {
        self.registry.lock().unwrap().add_states(specs)
    }

    pub fn set_selection(
        &self,
        state: &str,
        variant: &str,
        active: bool,
    ) -> Result<(), RegistryError> {
        self.registry.lock().unwrap().set_selection(state, variant, active)
    }

    pub fn deactivate_all(&self) {
        self.registry.lock().unwrap().deactivate_all()
    }

    pub fn fetch_states(&self) -> Vec<StateView> {
        self.registry.lock().unwrap().fetch_states()
    }

    pub fn active_variant(&self, state: &str) -> Option<Variant> {
        self.registry.lock().unwrap().active_variant(state)
    }

    /// Route one request through the interception table. The host transport
    /// calls this for every outgoing request and acts on the outcome.
    pub fn dispatch(&self, verb: Verb, url: &str) -> Outcome {
        self.hub.dispatch(verb, url)
    }

    /// Clone of the interception table handle, for wiring straight into a
    /// transport layer.
    pub fn hub(&self) -> InterceptorHub {
        self.hub.clone()
    }
}

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
