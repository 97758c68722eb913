pub mod errors;
pub mod memory;
pub mod postgres;
pub mod store;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryContentStore;
pub use postgres::PostgresContentStore;
pub use store::{normalize_key, ContentRecord, ContentStore, NewContentRecord};

use crate::infra::config;
use std::sync::Arc;

/// Opens the store selected by the environment: PostgreSQL when `DATABASE_URL` is set,
/// otherwise an in-memory store.
pub async fn open_from_env() -> anyhow::Result<Arc<dyn ContentStore>> {
    match config::database_url() {
        Some(url) => {
            let store = PostgresContentStore::connect(&url, config::max_connections()?).await?;
            tracing::info!("connected to PostgreSQL content store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory content store (data is not persisted)");
            Ok(Arc::new(InMemoryContentStore::new()))
        }
    }
}
