//! # continuum-storage
//!
//! Implementations of [`IEntityStore`], [`IHistoryLog`] and [`ICycleStore`].
//!
//! - [`InMemoryStore`]: `dashmap`-backed, for tests and single-process runs
//! - [`SqliteStore`]: one SQLite file, versioned migrations, WAL mode
//!
//! History is keyed by `(entity_id, date)` in both backends, so writing the
//! same day twice replaces the earlier snapshot. A cycle's entity and
//! snapshot are committed together through [`ICycleStore::commit_cycle`].

pub mod memory;
pub mod migrations;
pub mod queries;
pub mod sqlite;

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use continuum_core::config::{StorageBackend, StorageConfig};
use continuum_core::errors::{ContinuumError, ContinuumResult, StorageError};
use continuum_core::traits::{ICycleStore, IEntityStore, IHistoryLog};

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

/// Helper to convert a message into a storage error.
pub fn to_storage_err(message: String) -> ContinuumError {
    ContinuumError::Storage(StorageError::SqliteError { message })
}

/// Entity store and history log sharing one backend.
#[derive(Clone)]
pub struct Stores {
    pub entities: Arc<dyn IEntityStore>,
    pub history: Arc<dyn IHistoryLog>,
    pub cycles: Arc<dyn ICycleStore>,
}

impl Stores {
    /// All three views over one backend.
    pub fn shared<S: ICycleStore + 'static>(store: Arc<S>) -> Self {
        Self {
            entities: store.clone(),
            history: store.clone(),
            cycles: store,
        }
    }

    pub fn memory() -> Self {
        Self::shared(Arc::new(InMemoryStore::new()))
    }

    /// Open the backend named by `config`.
    pub fn open(config: &StorageConfig) -> ContinuumResult<Self> {
        match config.backend {
            StorageBackend::Memory => Ok(Self::memory()),
            StorageBackend::Sqlite => {
                let store = Arc::new(SqliteStore::open(Path::new(&config.db_path))?);
                info!(path = %config.db_path, "sqlite store opened");
                Ok(Self::shared(store))
            }
        }
    }
}
