//! In-memory interception table.

use crate::intercept::url::UrlPattern;
use crate::intercept::{Binding, Interceptor, Responder};
use crate::types::state::Verb;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Mutex};

/// What the transport should do with one dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Forward the request to the real network.
    PassThrough,
    /// Serve the canned response instead.
    Mock(MockResponse),
}

/// Canned response handed to the transport layer.
///
/// `delay_ms` is a deferred-completion hint for this one response; the
/// transport applies it, the engine never blocks on it.
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub body: Value,
    pub delay_ms: u64,
}

enum Mode {
    PassThrough,
    Respond(Responder),
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::PassThrough => f.write_str("PassThrough"),
            Mode::Respond(_) => f.write_str("Respond(..)"),
        }
    }
}

#[derive(Debug)]
struct BindingState {
    verb: Verb,
    pattern: UrlPattern,
    mode: Mode,
    next_delay_ms: u64,
}

type SharedBinding = Arc<Mutex<BindingState>>;

/// Cheaply-cloneable handle to the in-memory interception table.
///
/// Implements [`Interceptor`] for the engine side; the host's HTTP layer
/// calls [`dispatch`](InterceptorHub::dispatch) for every outgoing request
/// and acts on the returned [`Outcome`]. All clones share one table.
#[derive(Debug, Clone, Default)]
pub struct InterceptorHub {
    bindings: Arc<Mutex<Vec<SharedBinding>>>,
}

impl InterceptorHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one request through the table. The first binding matching both
    /// verb and URL wins, in registration order; no match is a pass-through.
    pub fn dispatch(&self, verb: Verb, url: &str) -> Outcome {
        let bindings = self.bindings.lock().unwrap();
        for binding in bindings.iter() {
            let mut guard = binding.lock().unwrap();
            let state = &mut *guard;
            if state.verb != verb || !state.pattern.matches(url) {
                continue;
            }
            return match &state.mode {
                Mode::PassThrough => Outcome::PassThrough,
                Mode::Respond(responder) => {
                    let (status, body) = responder();
                    // One-shot: consumed by this match, reset in the same step.
                    let delay_ms = std::mem::take(&mut state.next_delay_ms);
                    Outcome::Mock(MockResponse {
                        status,
                        body,
                        delay_ms,
                    })
                }
            };
        }
        Outcome::PassThrough
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Interceptor for InterceptorHub {
    fn register(&mut self, verb: Verb, url_pattern: &str) -> Box<dyn Binding> {
        let state = Arc::new(Mutex::new(BindingState {
            verb,
            pattern: UrlPattern::compile(url_pattern),
            mode: Mode::PassThrough,
            next_delay_ms: 0,
        }));
        self.bindings.lock().unwrap().push(Arc::clone(&state));
        Box::new(HubBinding { state })
    }
}

struct HubBinding {
    state: SharedBinding,
}

impl Binding for HubBinding {
    fn respond_with(&mut self, responder: Responder) {
        self.state.lock().unwrap().mode = Mode::Respond(responder);
    }

    fn pass_through(&mut self) {
        self.state.lock().unwrap().mode = Mode::PassThrough;
    }

    fn set_next_delay(&mut self, delay_ms: u64) {
        self.state.lock().unwrap().next_delay_ms = delay_ms;
    }
}
