//! Synchronization between the derived state view and the interceptor.

use crate::intercept::{Binding, Interceptor};
use crate::types::state::StateView;
use std::collections::HashMap;
use tracing::debug;

/// Drives an [`Interceptor`] so that every binding reflects its state's
/// latest derived view.
///
/// Bindings are created lazily on first sight of a state with a URL, keyed
/// by state name, and kept for the process lifetime; the catalog is
/// additive-only, so nothing is ever unregistered.
pub struct SyncEngine {
    interceptor: Box<dyn Interceptor>,
    bindings: HashMap<String, Box<dyn Binding>>,
}

impl SyncEngine {
    pub fn new(interceptor: Box<dyn Interceptor>) -> Self {
        Self {
            interceptor,
            bindings: HashMap::new(),
        }
    }

    /// Reconcile every binding. Callers observe a fully-reconciled
    /// interceptor when this returns.
    pub fn apply(&mut self, views: &[StateView]) {
        for view in views {
            self.apply_one(view);
        }
        debug!("synchronized {} states", views.len());
    }

    fn apply_one(&mut self, view: &StateView) {
        // A state with no URL is pure bookkeeping.
        let Some(url) = view.url.as_deref() else {
            return;
        };

        let Self {
            interceptor,
            bindings,
        } = self;
        let binding = bindings
            .entry(view.name.clone())
            .or_insert_with(|| interceptor.register(view.verb.unwrap_or_default(), url));

        match view.active_variant.as_ref().filter(|_| view.active) {
            Some(variant) => {
                let status = variant.status;
                let body = variant.body.clone();
                binding.respond_with(Box::new(move || (status, body.resolve())));
                binding.set_next_delay(variant.delay_ms);
            }
            None => binding.pass_through(),
        }
    }
}
