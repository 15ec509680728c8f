use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::debug;

use continuum_core::errors::{ContinuumResult, StorageError};
use continuum_core::models::{Entity, HistorySnapshot};
use continuum_core::traits::{ICycleStore, IEntityStore, IHistoryLog, LogWrite};

use crate::queries::{entity_ops, history_ops};
use crate::{migrations, to_storage_err};

/// Connection settings for file databases. A batch holds the lock for one
/// entity commit at a time, so a short busy wait is enough.
const FILE_PRAGMAS: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA busy_timeout = 5000;
";

/// SQLite-backed entity store and history log.
///
/// A single connection behind a mutex; cycles are short and writes small.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) a database file and bring its schema up to date.
    pub fn open(path: &Path) -> ContinuumResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        conn.execute_batch(FILE_PRAGMAS)
            .map_err(|e| to_storage_err(e.to_string()))?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// In-memory database (for testing).
    pub fn open_in_memory() -> ContinuumResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> ContinuumResult<Self> {
        let version = migrations::run_migrations(&conn)?;
        debug!(version, path = ?path, "sqlite schema ready");
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn schema_version(&self) -> ContinuumResult<u32> {
        migrations::current_version(&*self.lock()?)
    }

    /// Current journal mode, lowercased (`wal` for file databases).
    pub fn journal_mode(&self) -> ContinuumResult<String> {
        let mode: String = self
            .lock()?
            .pragma_query_value(None, "journal_mode", |row| row.get(0))
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(mode.to_ascii_lowercase())
    }

    fn lock(&self) -> ContinuumResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            StorageError::LockPoisoned {
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl IEntityStore for SqliteStore {
    fn get(&self, entity_id: &str) -> ContinuumResult<Option<Entity>> {
        entity_ops::get_entity(&*self.lock()?, entity_id)
    }

    fn put(&self, entity: &Entity) -> ContinuumResult<()> {
        entity_ops::upsert_entity(&*self.lock()?, entity)
    }

    fn list_ids(&self) -> ContinuumResult<Vec<String>> {
        entity_ops::list_entity_ids(&*self.lock()?)
    }
}

impl IHistoryLog for SqliteStore {
    fn write(&self, entity_id: &str, snapshot: &HistorySnapshot) -> ContinuumResult<LogWrite> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        let outcome = history_ops::upsert_snapshot(&tx, entity_id, snapshot)?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        Ok(outcome)
    }

    fn history(&self, entity_id: &str) -> ContinuumResult<Vec<HistorySnapshot>> {
        history_ops::get_history(&*self.lock()?, entity_id)
    }

    fn snapshot_on(
        &self,
        entity_id: &str,
        date: NaiveDate,
    ) -> ContinuumResult<Option<HistorySnapshot>> {
        history_ops::get_snapshot(&*self.lock()?, entity_id, date)
    }
}

impl ICycleStore for SqliteStore {
    /// Entity row and snapshot row in one transaction.
    fn commit_cycle(&self, entity: &Entity, snapshot: &HistorySnapshot) -> ContinuumResult<LogWrite> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        entity_ops::upsert_entity(&tx, entity)?;
        let written = history_ops::upsert_snapshot(&tx, &entity.id, snapshot)?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        debug!(entity_id = %entity.id, date = %snapshot.date, ?written, "cycle committed");
        Ok(written)
    }
}
