//! Raw SQL operations for the history_snapshots table.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use continuum_core::errors::{ContinuumResult, StorageError};
use continuum_core::models::HistorySnapshot;
use continuum_core::traits::LogWrite;

use crate::to_storage_err;

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn decode(entity_id: &str, body: &str) -> ContinuumResult<HistorySnapshot> {
    serde_json::from_str(body).map_err(|e| {
        StorageError::CorruptRecord {
            entity_id: entity_id.to_string(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Write a snapshot, replacing any existing row for the same day.
///
/// Must run inside a transaction so the existence check and the write
/// agree.
pub fn upsert_snapshot(
    conn: &Connection,
    entity_id: &str,
    snapshot: &HistorySnapshot,
) -> ContinuumResult<LogWrite> {
    let date = date_key(snapshot.date);
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM history_snapshots WHERE entity_id = ?1 AND date = ?2)",
            params![entity_id, date],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let body = serde_json::to_string(snapshot)?;
    conn.execute(
        "INSERT INTO history_snapshots (entity_id, date, body, input_hash)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(entity_id, date) DO UPDATE SET
            body = excluded.body,
            input_hash = excluded.input_hash,
            written_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![entity_id, date, body, snapshot.input_hash],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(if exists {
        LogWrite::Replaced
    } else {
        LogWrite::Appended
    })
}

pub fn get_history(conn: &Connection, entity_id: &str) -> ContinuumResult<Vec<HistorySnapshot>> {
    let mut stmt = conn
        .prepare(
            "SELECT body FROM history_snapshots
             WHERE entity_id = ?1
             ORDER BY date ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![entity_id], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut snapshots = Vec::new();
    for row in rows {
        let body = row.map_err(|e| to_storage_err(e.to_string()))?;
        snapshots.push(decode(entity_id, &body)?);
    }
    Ok(snapshots)
}

pub fn get_snapshot(
    conn: &Connection,
    entity_id: &str,
    date: NaiveDate,
) -> ContinuumResult<Option<HistorySnapshot>> {
    let body: Option<String> = conn
        .query_row(
            "SELECT body FROM history_snapshots WHERE entity_id = ?1 AND date = ?2",
            params![entity_id, date_key(date)],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    body.map(|b| decode(entity_id, &b)).transpose()
}
