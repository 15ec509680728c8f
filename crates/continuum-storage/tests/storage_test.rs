use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use continuum_core::config::{StorageBackend, StorageConfig};
use continuum_core::errors::{ContinuumError, StorageError};
use continuum_core::models::*;
use continuum_core::traits::{ICycleStore, IEntityStore, IHistoryLog, LogWrite};
use continuum_storage::{migrations, InMemoryStore, SqliteStore, Stores};

fn entity(id: &str) -> Entity {
    let at = Utc.with_ymd_and_hms(2026, 6, 1, 9, 30, 0).unwrap();
    let mut e = Entity::new(
        id,
        vec![
            Hypothesis::new("T1", "growth", 0.6, Direction::Upside, Sensitivity::Upside, at),
            Hypothesis::new("T2", "valuation", 0.4, Direction::Downside, Sensitivity::Downside, at),
        ],
    );
    e.name = format!("{id} Ltd");
    e.review = Some(ReviewMetadata {
        reviewed_at: at,
        price: 12.5,
    });
    e
}

fn snapshot(day: u32, price: f64) -> HistorySnapshot {
    HistorySnapshot {
        date: NaiveDate::from_ymd_opt(2026, 6, day).unwrap(),
        price,
        scores: BTreeMap::from([(HypothesisId::from("T1"), 0.6), (HypothesisId::from("T2"), 0.4)]),
        ranking: vec![HypothesisId::from("T1"), HypothesisId::from("T2")],
        skew: 20,
        classification: SkewClassification::Upside,
        dominant: HypothesisId::from("T1"),
        flip: false,
        dislocation: None,
        events: Vec::new(),
        input_hash: format!("hash-{day}-{price}"),
    }
}

fn exercise_entity_store(store: &dyn IEntityStore) {
    assert!(store.get("ABC").unwrap().is_none());
    let mut e = entity("ABC");
    store.put(&e).unwrap();
    store.put(&entity("AAA")).unwrap();
    assert_eq!(store.get("ABC").unwrap(), Some(e.clone()));

    e.dominant = Some(HypothesisId::from("T1"));
    store.put(&e).unwrap();
    assert_eq!(store.get("ABC").unwrap().unwrap().dominant, e.dominant);
    assert_eq!(store.list_ids().unwrap(), vec!["AAA".to_string(), "ABC".to_string()]);
}

fn exercise_history_log(log: &dyn IHistoryLog) {
    assert_eq!(log.write("ABC", &snapshot(2, 10.0)).unwrap(), LogWrite::Appended);
    assert_eq!(log.write("ABC", &snapshot(1, 9.0)).unwrap(), LogWrite::Appended);
    assert_eq!(log.write("ABC", &snapshot(2, 11.0)).unwrap(), LogWrite::Replaced);
    assert_eq!(log.write("XYZ", &snapshot(2, 5.0)).unwrap(), LogWrite::Appended);

    let history = log.history("ABC").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date.to_string(), "2026-06-01");
    assert_eq!(history[1].price, 11.0);

    let day2 = NaiveDate::from_ymd_opt(2026, 6, 2).unwrap();
    assert_eq!(log.snapshot_on("ABC", day2).unwrap(), Some(snapshot(2, 11.0)));
    assert!(log.snapshot_on("NONE", day2).unwrap().is_none());
    assert!(log.history("NONE").unwrap().is_empty());
}

fn exercise_cycle_store(store: &dyn ICycleStore) {
    let mut e = entity("CYC");
    assert_eq!(store.commit_cycle(&e, &snapshot(3, 10.0)).unwrap(), LogWrite::Appended);
    assert_eq!(store.get("CYC").unwrap(), Some(e.clone()));

    e.dominant = Some(HypothesisId::from("T2"));
    assert_eq!(store.commit_cycle(&e, &snapshot(3, 9.5)).unwrap(), LogWrite::Replaced);
    assert_eq!(store.get("CYC").unwrap(), Some(e));
    assert_eq!(store.history("CYC").unwrap(), vec![snapshot(3, 9.5)]);
}

#[test]
fn memory_store_contract() {
    let store = InMemoryStore::new();
    exercise_entity_store(&store);
    exercise_history_log(&store);
    assert_eq!(store.entity_count(), 2);
}

#[test]
fn sqlite_store_contract() {
    let store = SqliteStore::open_in_memory().unwrap();
    exercise_entity_store(&store);
    exercise_history_log(&store);
}

#[test]
fn cycle_commit_contract() {
    exercise_cycle_store(&InMemoryStore::new());
    exercise_cycle_store(&SqliteStore::open_in_memory().unwrap());
}

#[test]
fn rejected_snapshot_rolls_back_the_entity_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rollback.db");
    let store = SqliteStore::open(&path).unwrap();
    let before = entity("ROLLBACK");
    store.commit_cycle(&before, &snapshot(1, 12.0)).unwrap();

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_day_two BEFORE INSERT ON history_snapshots
         WHEN NEW.date = '2026-06-02'
         BEGIN SELECT RAISE(ABORT, 'snapshot rejected'); END;",
    )
    .unwrap();
    drop(conn);

    let mut after = before.clone();
    after.name = "Renamed Ltd".to_string();
    after.dominant = Some(HypothesisId::from("T2"));
    match store.commit_cycle(&after, &snapshot(2, 8.0)) {
        Err(ContinuumError::Storage(StorageError::SqliteError { message })) => {
            assert!(message.contains("snapshot rejected"), "{message}")
        }
        other => panic!("expected sqlite error, got {other:?}"),
    }
    assert_eq!(store.get("ROLLBACK").unwrap(), Some(before));
    assert_eq!(store.history("ROLLBACK").unwrap(), vec![snapshot(1, 12.0)]);
}

#[test]
fn sqlite_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("continuum.db");
    {
        let store = SqliteStore::open(&path).unwrap();
        store.put(&entity("ABC")).unwrap();
        store.write("ABC", &snapshot(1, 9.0)).unwrap();
        assert_eq!(store.path(), Some(path.as_path()));
    }
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.schema_version().unwrap(), migrations::LATEST_VERSION);
    assert_eq!(store.get("ABC").unwrap(), Some(entity("ABC")));
    assert_eq!(store.history("ABC").unwrap(), vec![snapshot(1, 9.0)]);
}

#[test]
fn wal_mode_enabled_on_file_databases() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(&dir.path().join("wal.db")).unwrap();
    assert_eq!(store.journal_mode().unwrap(), "wal");
    let scratch = SqliteStore::open_in_memory().unwrap();
    assert_eq!(scratch.journal_mode().unwrap(), "memory");
}

#[test]
fn corrupt_entity_body_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.db");
    SqliteStore::open(&path).unwrap();
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO entities (entity_id, body) VALUES ('BAD', '{not json')",
        [],
    )
    .unwrap();
    drop(conn);

    let store = SqliteStore::open(&path).unwrap();
    match store.get("BAD") {
        Err(ContinuumError::Storage(StorageError::CorruptRecord { entity_id, .. })) => {
            assert_eq!(entity_id, "BAD")
        }
        other => panic!("expected corrupt record, got {other:?}"),
    }
}

#[test]
fn stores_open_from_config() {
    let memory = Stores::open(&StorageConfig::default()).unwrap();
    memory.entities.put(&entity("M")).unwrap();
    assert!(memory.entities.get("M").unwrap().is_some());

    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        backend: StorageBackend::Sqlite,
        db_path: dir.path().join("cfg.db").display().to_string(),
    };
    let sqlite = Stores::open(&config).unwrap();
    sqlite.history.write("S", &snapshot(3, 1.0)).unwrap();
    assert_eq!(sqlite.history.history("S").unwrap().len(), 1);
}
