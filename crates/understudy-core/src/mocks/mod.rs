//! Mock-state management module.
//!
//! - [`Registry`](registry::Registry): canonical catalog of states and the
//!   operations that mutate it
//! - [`SyncEngine`](engine::SyncEngine): reconciles the derived selection
//!   view with the interception layer after every mutation

pub mod engine;
pub mod registry;
