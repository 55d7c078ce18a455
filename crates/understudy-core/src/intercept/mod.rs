//! Request interception contract and the bundled in-memory backend.
//!
//! The engine drives any [`Interceptor`] through this contract; the host's
//! transport layer is free to supply its own implementation. One binding is
//! created at most once per state and reconfigured in place on every
//! synchronization pass; bindings are never removed.

mod hub;
mod url;

pub use hub::{InterceptorHub, MockResponse, Outcome};
pub use url::UrlPattern;

use crate::types::state::Verb;
use serde_json::Value;

/// Produces the `(status, body)` pair served for one matched request.
pub type Responder = Box<dyn Fn() -> (u16, Value) + Send + Sync>;

/// A request-matching facility keyed by (verb, URL pattern).
pub trait Interceptor: Send {
    /// Register a matcher and return its live binding.
    fn register(&mut self, verb: Verb, url_pattern: &str) -> Box<dyn Binding>;
}

/// Live interception registration for one state.
pub trait Binding: Send {
    /// Serve a synthetic response produced by `responder` for every match.
    fn respond_with(&mut self, responder: Responder);

    /// Forward matching requests to the real network untouched.
    fn pass_through(&mut self);

    /// Delay the next matched response by `delay_ms`, once. The setting is
    /// consumed by a single match and then resets to zero.
    fn set_next_delay(&mut self, delay_ms: u64);
}
