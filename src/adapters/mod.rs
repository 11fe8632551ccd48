// Adapters layer: concrete PollStore backends.

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::domain::ports::{ConfigProvider, PollStore, StoreKind};
use crate::utils::error::Result;
use std::sync::Arc;

/// Build the store named by the configuration. Called once at startup; the
/// returned handle is shared by every request and dropped at shutdown.
pub async fn open_store<C: ConfigProvider + ?Sized>(config: &C) -> Result<Arc<dyn PollStore>> {
    match config.store_kind() {
        StoreKind::File => Ok(Arc::new(FileStore::open(config.store_path()).await?)),
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store, submissions will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
