//! Raw SQL operations for the entities table.

use rusqlite::{params, Connection, OptionalExtension};

use continuum_core::errors::{ContinuumResult, StorageError};
use continuum_core::models::Entity;

use crate::to_storage_err;

/// Insert or replace an entity body.
pub fn upsert_entity(conn: &Connection, entity: &Entity) -> ContinuumResult<()> {
    let body = serde_json::to_string(entity)?;
    conn.execute(
        "INSERT INTO entities (entity_id, body) VALUES (?1, ?2)
         ON CONFLICT(entity_id) DO UPDATE SET
            body = excluded.body,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![entity.id, body],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_entity(conn: &Connection, entity_id: &str) -> ContinuumResult<Option<Entity>> {
    let body: Option<String> = conn
        .query_row(
            "SELECT body FROM entities WHERE entity_id = ?1",
            params![entity_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match body {
        Some(body) => {
            let entity = serde_json::from_str(&body).map_err(|e| StorageError::CorruptRecord {
                entity_id: entity_id.to_string(),
                details: e.to_string(),
            })?;
            Ok(Some(entity))
        }
        None => Ok(None),
    }
}

pub fn list_entity_ids(conn: &Connection) -> ContinuumResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT entity_id FROM entities ORDER BY entity_id ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut ids = Vec::new();
    for row in rows {
        ids.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(ids)
}
