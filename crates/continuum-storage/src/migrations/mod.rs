//! Versioned schema migrations, tracked with `PRAGMA user_version`.

mod v001_initial;

use rusqlite::Connection;
use tracing::info;

use continuum_core::errors::{ContinuumResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> ContinuumResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_initial::migrate)];

pub const LATEST_VERSION: u32 = 1;

pub fn current_version(conn: &Connection) -> ContinuumResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the database's version.
pub fn run_migrations(conn: &Connection) -> ContinuumResult<u32> {
    let mut version = current_version(conn)?;
    for (target, migrate) in MIGRATIONS {
        if *target <= version {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: *target,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", target)
            .map_err(|e| to_storage_err(e.to_string()))?;
        version = *target;
        info!(version, "applied migration");
    }
    Ok(version)
}
