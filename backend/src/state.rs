//! Shared application state handed to every handler.

use std::sync::Arc;

use sakhi_adapters::DocumentStore;

/// Shared handler state. The store is injected at startup, never global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
