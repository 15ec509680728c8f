use chrono::NaiveDate;

use crate::errors::ContinuumResult;
use crate::models::{Entity, HistorySnapshot};

/// Whether a history write added a new day or replaced today's snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogWrite {
    Appended,
    Replaced,
}

/// Persistence of entity state. Last write wins per entity id.
pub trait IEntityStore: Send + Sync {
    fn get(&self, entity_id: &str) -> ContinuumResult<Option<Entity>>;
    fn put(&self, entity: &Entity) -> ContinuumResult<()>;
    /// All known entity ids, sorted.
    fn list_ids(&self) -> ContinuumResult<Vec<String>>;
}

/// Per-entity append log of daily snapshots.
///
/// Keyed by `(entity_id, date)`: writing a date that already exists replaces
/// that snapshot; earlier dates are never rewritten by a later date's write.
pub trait IHistoryLog: Send + Sync {
    fn write(&self, entity_id: &str, snapshot: &HistorySnapshot) -> ContinuumResult<LogWrite>;
    /// Snapshots for an entity, date-ascending.
    fn history(&self, entity_id: &str) -> ContinuumResult<Vec<HistorySnapshot>>;
    fn snapshot_on(&self, entity_id: &str, date: NaiveDate)
        -> ContinuumResult<Option<HistorySnapshot>>;
}

/// A store holding both entity state and history, able to commit one
/// cycle's results as a unit.
pub trait ICycleStore: IEntityStore + IHistoryLog {
    /// Persist the updated entity together with its snapshot for the day.
    ///
    /// On error the stored entity must be unchanged. The default writes the
    /// snapshot first, so a failed history write never advances the entity;
    /// backends with transactions should do both in one.
    fn commit_cycle(&self, entity: &Entity, snapshot: &HistorySnapshot) -> ContinuumResult<LogWrite> {
        let written = self.write(&entity.id, snapshot)?;
        self.put(entity)?;
        Ok(written)
    }
}
