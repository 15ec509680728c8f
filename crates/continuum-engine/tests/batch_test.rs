use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use continuum_core::config::StorageBackend;
use continuum_core::errors::{ContinuumResult, SourceError, StorageError};
use continuum_core::models::{Entity, HistorySnapshot, PriceObservation, Severity};
use continuum_core::traits::{
    ICycleStore, IEntityStore, IHistoryLog, IMarketDataSource, INewsSource, LogWrite, NoNews,
};
use continuum_core::ContinuumConfig;
use continuum_engine::{BatchRunner, EntityOutcome};
use continuum_storage::{InMemoryStore, Stores};

struct FixedMarket {
    observations: HashMap<String, PriceObservation>,
    down: HashSet<String>,
}

impl IMarketDataSource for FixedMarket {
    fn observation(&self, entity_id: &str) -> Result<Option<PriceObservation>, SourceError> {
        if self.down.contains(entity_id) {
            return Err(SourceError::Unavailable {
                source_name: "fixed-market".to_string(),
                reason: "connection refused".to_string(),
            });
        }
        Ok(self.observations.get(entity_id).cloned())
    }
}

struct BrokenNews;

impl INewsSource for BrokenNews {
    fn headlines(&self, _entity_id: &str) -> Result<Vec<String>, SourceError> {
        Err(SourceError::Unavailable {
            source_name: "wire".to_string(),
            reason: "timeout".to_string(),
        })
    }
}

/// Stores entities normally but rejects every history write.
struct ReadOnlyHistory(InMemoryStore);

impl IEntityStore for ReadOnlyHistory {
    fn get(&self, entity_id: &str) -> ContinuumResult<Option<Entity>> {
        self.0.get(entity_id)
    }

    fn put(&self, entity: &Entity) -> ContinuumResult<()> {
        self.0.put(entity)
    }

    fn list_ids(&self) -> ContinuumResult<Vec<String>> {
        self.0.list_ids()
    }
}

impl IHistoryLog for ReadOnlyHistory {
    fn write(&self, _entity_id: &str, _snapshot: &HistorySnapshot) -> ContinuumResult<LogWrite> {
        Err(StorageError::SqliteError {
            message: "disk I/O error".to_string(),
        }
        .into())
    }

    fn history(&self, entity_id: &str) -> ContinuumResult<Vec<HistorySnapshot>> {
        self.0.history(entity_id)
    }

    fn snapshot_on(
        &self,
        entity_id: &str,
        date: NaiveDate,
    ) -> ContinuumResult<Option<HistorySnapshot>> {
        self.0.snapshot_on(entity_id, date)
    }
}

impl ICycleStore for ReadOnlyHistory {}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 30, 12, 0, 0).unwrap()
}

fn renamed(id: &str) -> Entity {
    let mut entity = test_fixtures::entity("xro");
    entity.id = id.to_string();
    entity
}

/// XRO processes, STALE fails, DOWN has no market data, NOOBS has no
/// observation, EMPTY has no hypotheses, GHOST is not stored.
fn seeded(stores: &Stores) -> Arc<FixedMarket> {
    stores.entities.put(&test_fixtures::entity("xro")).unwrap();
    for id in ["STALE", "DOWN", "NOOBS"] {
        stores.entities.put(&renamed(id)).unwrap();
    }
    stores.entities.put(&Entity::new("EMPTY", vec![])).unwrap();

    let crash = test_fixtures::observation("xro_capitulation");
    let mut stale = crash.clone();
    stale.date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

    let mut observations = HashMap::new();
    observations.insert("XRO".to_string(), crash.clone());
    observations.insert("EMPTY".to_string(), crash);
    observations.insert("STALE".to_string(), stale);
    Arc::new(FixedMarket {
        observations,
        down: HashSet::from(["DOWN".to_string()]),
    })
}

fn all_ids() -> Vec<String> {
    ["XRO", "STALE", "DOWN", "NOOBS", "EMPTY", "GHOST", "XRO"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn one_bad_entity_never_affects_another() {
    let config = test_fixtures::config("continuum");
    let stores = Stores::memory();
    let market = seeded(&stores);
    let runner = BatchRunner::new(config, stores.clone(), market, Arc::new(NoNews));

    let report = runner.run(&all_ids(), now());

    assert_eq!(report.results.len(), 6, "duplicate ids are processed once");
    assert_eq!(report.processed(), 1);
    assert_eq!(report.skipped(), 3);
    assert_eq!(report.source_failures(), 1);
    assert_eq!(report.failures(), 1);

    match report.outcome("XRO").unwrap() {
        EntityOutcome::Processed { report } => {
            assert_eq!(report.dislocation.severity, Severity::Critical)
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        report.outcome("STALE"),
        Some(EntityOutcome::Failed { code: "INVALID_STATE", .. })
    ));
    assert!(matches!(
        report.outcome("DOWN"),
        Some(EntityOutcome::SourceFailed { .. })
    ));
    for (id, reason) in [
        ("NOOBS", "no price observation"),
        ("GHOST", "no entity record"),
    ] {
        match report.outcome(id) {
            Some(EntityOutcome::Skipped { reason: r }) => assert_eq!(r, reason),
            other => panic!("{id}: unexpected {other:?}"),
        }
    }
    assert!(matches!(
        report.outcome("EMPTY"),
        Some(EntityOutcome::Skipped { .. })
    ));

    let ids: Vec<&str> = report.results.iter().map(|r| r.entity_id.as_str()).collect();
    assert_eq!(ids, ["XRO", "STALE", "DOWN", "NOOBS", "EMPTY", "GHOST"]);
}

#[test]
fn processed_entities_are_persisted_and_failures_are_not() {
    let config = test_fixtures::config("continuum");
    let stores = Stores::memory();
    let market = seeded(&stores);
    let runner = BatchRunner::new(config, stores.clone(), market, Arc::new(NoNews));
    runner.run(&all_ids(), now());

    let xro = stores.entities.get("XRO").unwrap().unwrap();
    assert_eq!(xro.price_history.last().unwrap().price, 60.0);
    assert_eq!(stores.history.history("XRO").unwrap().len(), 1);

    let stale = stores.entities.get("STALE").unwrap().unwrap();
    assert_eq!(stale, renamed("STALE"));
    assert!(stores.history.history("STALE").unwrap().is_empty());
    assert!(stores.history.history("DOWN").unwrap().is_empty());
}

#[test]
fn failed_history_write_leaves_entity_untouched() {
    let config = test_fixtures::config("continuum");
    let stores = Stores::shared(Arc::new(ReadOnlyHistory(InMemoryStore::new())));
    let market = seeded(&stores);
    let runner = BatchRunner::new(config, stores.clone(), market, Arc::new(NoNews));

    let report = runner.run(&["XRO".to_string()], now());

    assert!(matches!(
        report.outcome("XRO"),
        Some(EntityOutcome::Failed { code: "STORAGE_ERROR", .. })
    ));
    assert_eq!(
        stores.entities.get("XRO").unwrap(),
        Some(test_fixtures::entity("xro"))
    );
    assert!(stores.history.history("XRO").unwrap().is_empty());
}

#[test]
fn same_day_rerun_keeps_one_snapshot() {
    let config = test_fixtures::config("continuum");
    let stores = Stores::memory();
    let market = seeded(&stores);
    let runner = BatchRunner::new(config, stores.clone(), market, Arc::new(NoNews));

    let ids = vec!["XRO".to_string()];
    runner.run(&ids, now());
    let second = runner.run(&ids, now());

    assert_eq!(second.processed(), 1);
    let history = stores.history.history("XRO").unwrap();
    assert_eq!(history.len(), 1);
    let xro = stores.entities.get("XRO").unwrap().unwrap();
    assert_eq!(xro.price_history.len(), 3);
    match second.outcome("XRO") {
        Some(EntityOutcome::Processed { report }) => {
            assert!(report.price_replaced);
            assert_eq!(history[0].input_hash.len(), 64);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn news_outage_does_not_block_the_cycle() {
    let config = test_fixtures::config("continuum");
    let stores = Stores::memory();
    let market = seeded(&stores);
    let runner = BatchRunner::new(config, stores, market, Arc::new(BrokenNews));

    let report = runner.run(&["XRO".to_string()], now());
    match report.outcome("XRO") {
        Some(EntityOutcome::Processed { report }) => assert!(!report.inference.news_override),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let run_with = |parallel: bool| {
        let mut config = test_fixtures::config("continuum");
        config.engine.parallel = parallel;
        let stores = Stores::memory();
        let market = seeded(&stores);
        let runner = BatchRunner::new(config, stores, market, Arc::new(NoNews));
        runner.run(&all_ids(), now()).results
    };
    assert_eq!(run_with(true), run_with(false));
}

#[test]
fn run_all_uses_every_stored_entity() {
    let config = test_fixtures::config("continuum");
    let stores = Stores::memory();
    let market = seeded(&stores);
    let runner = BatchRunner::new(config, stores, market, Arc::new(NoNews));

    let report = runner.run_all(now()).unwrap();
    let ids: Vec<&str> = report.results.iter().map(|r| r.entity_id.as_str()).collect();
    assert_eq!(ids, ["DOWN", "EMPTY", "NOOBS", "STALE", "XRO"]);
    assert!(report.finished_at >= report.started_at);
}

#[test]
fn sqlite_backend_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut config: ContinuumConfig = test_fixtures::config("continuum");
    config.storage.backend = StorageBackend::Sqlite;
    config.storage.db_path = dir.path().join("continuum.db").display().to_string();

    let stores = Stores::open(&config.storage).unwrap();
    let market = seeded(&stores);
    let runner = BatchRunner::new(config.clone(), stores, market, Arc::new(NoNews));
    let report = runner.run(&["XRO".to_string()], now());
    assert_eq!(report.processed(), 1);
    drop(runner);

    let reopened = Stores::open(&config.storage).unwrap();
    let history = reopened.history.history("XRO").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].price, 60.0);
    assert_eq!(
        reopened.entities.get("XRO").unwrap().unwrap().alert_state,
        continuum_core::models::AlertState::Critical
    );
}

#[test]
fn batch_report_serializes_outcome_tags() {
    let config = test_fixtures::config("continuum");
    let stores = Stores::memory();
    let market = seeded(&stores);
    let runner = BatchRunner::new(config, stores, market, Arc::new(NoNews));
    let report = runner.run(&["GHOST".to_string(), "DOWN".to_string()], now());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["results"][0]["outcome"]["status"], "skipped");
    assert_eq!(json["results"][1]["outcome"]["status"], "source_failed");
}
