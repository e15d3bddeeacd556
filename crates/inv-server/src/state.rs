use std::sync::Arc;

use inv_store::{InMemoryMaterialStore, MaterialStore, StorePolicy};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MaterialStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MaterialStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(policy: StorePolicy) -> Self {
        Self::new(Arc::new(InMemoryMaterialStore::with_policy(policy)))
    }
}
