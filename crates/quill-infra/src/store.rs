//! Store selection - durable SQL store when configured, in-memory fallback
//! otherwise.

use std::sync::Arc;

use quill_core::ports::PostStore;

use crate::database::StoreConfig;
use crate::memory::InMemoryPostStore;

#[cfg(feature = "sql")]
use crate::database::{SqlPostStore, connect};

/// Build the post store with the appropriate implementation.
pub async fn init_store(config: Option<&StoreConfig>) -> Arc<dyn PostStore> {
    #[cfg(feature = "sql")]
    if let Some(config) = config {
        match connect(config).await {
            Ok(db) => return Arc::new(SqlPostStore::new(db)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
            }
        }
    } else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
    }

    #[cfg(not(feature = "sql"))]
    let _ = config;

    Arc::new(InMemoryPostStore::new())
}
