//! Core library for Understudy: a mock-state registry and synchronization
//! engine for HTTP endpoints.
//!
//! An application under test declares named states for the endpoints it
//! talks to, each with one or more response variants. Toggling which variant
//! is active routes matching requests to a canned response; everything else
//! passes through to the real network. The registry holds the catalog, a
//! [`SelectionStore`] persists which variant is selected, and every mutation
//! ends with a synchronization pass that reconfigures the interception layer
//! before the call returns.
//!
//! ```
//! use understudy_core::{InterceptorHub, MemoryStore, Outcome, Registry, UpsertSpec, Verb};
//!
//! let hub = InterceptorHub::new();
//! let mut registry = Registry::new(Box::new(MemoryStore::new()), Box::new(hub.clone()));
//!
//! registry
//!     .upsert(UpsertSpec {
//!         state: "users".into(),
//!         url: Some("/api/users".into()),
//!         verb: Some(Verb::Get),
//!         name: "empty".into(),
//!         body: serde_json::json!([]).into(),
//!         ..UpsertSpec::default()
//!     })
//!     .unwrap();
//!
//! // Nothing is served until a variant is activated.
//! assert_eq!(hub.dispatch(Verb::Get, "/api/users"), Outcome::PassThrough);
//!
//! registry.set_selection("users", "empty", true).unwrap();
//! let Outcome::Mock(response) = hub.dispatch(Verb::Get, "/api/users") else {
//!     panic!("expected a mock outcome");
//! };
//! assert_eq!(response.status, 200);
//! ```

pub mod config;
pub mod intercept;
pub mod mocks;
pub mod store;
pub mod types;

pub use config::ConfigError;
pub use intercept::{Binding, Interceptor, InterceptorHub, MockResponse, Outcome, Responder};
pub use mocks::engine::SyncEngine;
pub use mocks::registry::{Registry, RegistryError, UpsertSpec};
pub use store::{FileStore, MemoryStore, SelectionStore, StoreError};
pub use types::selection::{Selection, SelectionMap};
pub use types::spec::{StateSpec, VariantSpec};
pub use types::state::{State, StateView, Verb};
pub use types::variant::{Body, Variant};
