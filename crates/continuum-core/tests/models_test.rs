use chrono::{NaiveDate, TimeZone, Utc};

use continuum_core::errors::{ContinuumError, ContinuumErrorCode, CycleError, MissingData};
use continuum_core::models::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entity() -> Entity {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    Entity::new(
        "XRO",
        vec![
            Hypothesis::new("T1", "Growth", 0.5, Direction::Upside, Sensitivity::Upside, now),
            Hypothesis::new("T2", "Risk", 0.5, Direction::Downside, Sensitivity::Downside, now),
        ],
    )
}

#[test]
fn status_tiers_follow_score() {
    assert_eq!(HypothesisStatus::from_score(0.55), HypothesisStatus::Strong);
    assert_eq!(HypothesisStatus::from_score(0.40), HypothesisStatus::Strong);
    assert_eq!(HypothesisStatus::from_score(0.30), HypothesisStatus::Moderate);
    assert_eq!(HypothesisStatus::from_score(0.12), HypothesisStatus::Weak);
    assert_eq!(HypothesisStatus::from_score(0.05), HypothesisStatus::Fading);
}

#[test]
fn price_history_is_append_only_with_same_day_replace() {
    let mut e = entity();
    let p = |d, price| PricePoint { date: d, price };

    assert_eq!(e.append_price(p(date(2026, 3, 2), 10.0)), PriceAppend::Appended);
    assert_eq!(e.append_price(p(date(2026, 3, 3), 11.0)), PriceAppend::Appended);
    assert_eq!(e.append_price(p(date(2026, 3, 3), 11.5)), PriceAppend::Replaced);
    assert_eq!(e.append_price(p(date(2026, 3, 1), 9.0)), PriceAppend::Rejected);

    assert_eq!(e.price_history.len(), 2);
    assert_eq!(e.latest_price().unwrap().price, 11.5);
}

#[test]
fn alert_state_tracks_severity() {
    assert_eq!(AlertState::from(Severity::Normal), AlertState::Normal);
    assert_eq!(AlertState::from(Severity::Moderate), AlertState::Watch);
    assert_eq!(AlertState::from(Severity::High), AlertState::Alert);
    assert_eq!(AlertState::from(Severity::Critical), AlertState::Critical);
}

#[test]
fn evidence_deserializes_with_missing_decay_parameters() {
    let json = r#"{
        "id": "ev-1",
        "date": "2026-01-15",
        "source": "H1 result",
        "diagnosticity": "HIGH",
        "impacts": { "T1": "CONSISTENT", "T2": "INCONSISTENT" }
    }"#;
    let item: EvidenceItem = serde_json::from_str(json).unwrap();
    assert!(item.active);
    assert_eq!(item.full_weight_days, None);
    assert_eq!(item.impact_on(&HypothesisId::from("T1")), Impact::Consistent);
    assert_eq!(item.impact_on(&HypothesisId::from("T9")), Impact::Neutral);
}

#[test]
fn entity_round_trips_through_json() {
    let mut e = entity();
    e.last_flip = Some(FlipRecord {
        date: date(2026, 2, 1),
        from: HypothesisId::from("T2"),
        to: HypothesisId::from("T1"),
        trigger: "earnings beat".to_string(),
        price: 12.0,
        from_score: 0.4,
        to_score: 0.45,
    });
    let json = serde_json::to_string(&e).unwrap();
    let back: Entity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);
    assert!((back.score_sum() - 1.0).abs() < 1e-9);
}

#[test]
fn missing_data_is_a_skip_with_stable_code() {
    let err = CycleError::missing("XRO", MissingData::PriceObservation);
    assert!(err.is_skip());
    let wrapped: ContinuumError = err.into();
    assert_eq!(wrapped.error_code(), "MISSING_DATA");
    assert!(wrapped.to_string().contains("no price observation"));
}
