pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use record::{TournamentRecord, TournamentSnapshot};
pub use store::{StoreError, TournamentStore};

use std::sync::Arc;

use crate::config::{StoreBackend, StoreConfig};

/// Build the store selected by configuration
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn TournamentStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory tournament store; records are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres => Ok(Arc::new(PgStore::connect(config).await?)),
    }
}
