use std::collections::BTreeMap;

use chrono::NaiveDate;
use dashmap::DashMap;

use continuum_core::errors::ContinuumResult;
use continuum_core::models::{Entity, HistorySnapshot};
use continuum_core::traits::{ICycleStore, IEntityStore, IHistoryLog, LogWrite};

/// In-memory entity store and history log.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entities: DashMap<String, Entity>,
    history: DashMap<String, BTreeMap<NaiveDate, HistorySnapshot>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl IEntityStore for InMemoryStore {
    fn get(&self, entity_id: &str) -> ContinuumResult<Option<Entity>> {
        Ok(self.entities.get(entity_id).map(|e| e.value().clone()))
    }

    fn put(&self, entity: &Entity) -> ContinuumResult<()> {
        self.entities.insert(entity.id.clone(), entity.clone());
        Ok(())
    }

    fn list_ids(&self) -> ContinuumResult<Vec<String>> {
        let mut ids: Vec<String> = self.entities.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        Ok(ids)
    }
}

impl IHistoryLog for InMemoryStore {
    fn write(&self, entity_id: &str, snapshot: &HistorySnapshot) -> ContinuumResult<LogWrite> {
        let mut days = self.history.entry(entity_id.to_string()).or_default();
        Ok(match days.insert(snapshot.date, snapshot.clone()) {
            Some(_) => LogWrite::Replaced,
            None => LogWrite::Appended,
        })
    }

    fn history(&self, entity_id: &str) -> ContinuumResult<Vec<HistorySnapshot>> {
        Ok(self
            .history
            .get(entity_id)
            .map(|days| days.values().cloned().collect())
            .unwrap_or_default())
    }

    fn snapshot_on(
        &self,
        entity_id: &str,
        date: NaiveDate,
    ) -> ContinuumResult<Option<HistorySnapshot>> {
        Ok(self
            .history
            .get(entity_id)
            .and_then(|days| days.get(&date).cloned()))
    }
}

impl ICycleStore for InMemoryStore {}
