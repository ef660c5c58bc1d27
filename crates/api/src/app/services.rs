use std::sync::Arc;

use stockroom_inventory::{InMemoryInventoryStore, InventoryStore};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn InventoryStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Fresh, empty in-memory inventory.
    pub fn in_memory() -> Self {
        tracing::info!("using in-memory inventory store");
        Self::new(Arc::new(InMemoryInventoryStore::new()))
    }

    pub fn store(&self) -> &dyn InventoryStore {
        self.store.as_ref()
    }
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices")
            .field("items", &self.store.len())
            .finish()
    }
}
