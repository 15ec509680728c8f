//! v001: entities, history_snapshots.

use rusqlite::Connection;

use continuum_core::errors::ContinuumResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ContinuumResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS entities (
            entity_id   TEXT PRIMARY KEY,
            body        TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS history_snapshots (
            entity_id   TEXT NOT NULL,
            date        TEXT NOT NULL,
            body        TEXT NOT NULL,
            input_hash  TEXT NOT NULL,
            written_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (entity_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_history_entity ON history_snapshots(entity_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
