//! Shared application state

use std::sync::Arc;

use crate::db::{MemoryStore, SalesStore, StoreError};

use super::Config;

/// State shared by all request handlers
///
/// The store is behind `Arc<dyn SalesStore>` so handlers stay agnostic of the
/// backing engine; requests only ever read from it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SalesStore>,
}

impl AppState {
    /// Build state from configuration
    ///
    /// With `DATA_SNAPSHOT` set the in-memory store is loaded from that JSON
    /// file; otherwise the server starts over an empty snapshot.
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let store = match &config.data_snapshot {
            Some(path) => {
                let store = MemoryStore::from_snapshot_file(path)?;
                tracing::info!(
                    path = %path,
                    transactions = store.transaction_count(),
                    "Loaded store snapshot"
                );
                store
            }
            None => {
                tracing::warn!("DATA_SNAPSHOT not set, serving an empty store");
                MemoryStore::new()
            }
        };

        Ok(Self {
            config: config.clone(),
            store: Arc::new(store),
        })
    }

    /// Build state over an already-constructed store (tests)
    pub fn with_store(config: Config, store: Arc<dyn SalesStore>) -> Self {
        Self { config, store }
    }
}
