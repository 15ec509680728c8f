use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use continuum_core::config::DecayConfig;
use continuum_core::models::{Diagnosticity, EvidenceItem, HypothesisId, Impact};
use continuum_decay::{factors, formula, EvidenceDecayEngine};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()
}

fn make_item(
    days_old: i64,
    diagnosticity: Diagnosticity,
    impact: Impact,
    full_weight_days: Option<u32>,
    half_life_days: Option<u32>,
) -> EvidenceItem {
    EvidenceItem {
        id: format!("ev-{days_old}"),
        date: as_of() - Duration::days(days_old),
        source: "broker note".to_string(),
        diagnosticity,
        full_weight_days,
        half_life_days,
        impacts: BTreeMap::from([(HypothesisId::from("T1"), impact)]),
        active: true,
    }
}

fn t1() -> HypothesisId {
    HypothesisId::from("T1")
}

#[test]
fn full_weight_inside_window() {
    assert_eq!(factors::temporal::weight(0.0, 30.0, 60.0), 1.0);
    assert_eq!(factors::temporal::weight(30.0, 30.0, 60.0), 1.0);
}

#[test]
fn halves_every_half_life_after_window() {
    let one = factors::temporal::weight(90.0, 30.0, 60.0);
    let two = factors::temporal::weight(150.0, 30.0, 60.0);
    assert!((one - 0.5).abs() < 1e-12);
    assert!((two - 0.25).abs() < 1e-12);
}

#[test]
fn future_dated_evidence_has_zero_age() {
    let later = as_of() + Duration::days(5);
    assert_eq!(factors::temporal::age_days(later, as_of()), 0.0);
}

#[test]
fn consistent_high_diagnosticity_fresh_item() {
    let engine = EvidenceDecayEngine::default();
    let item = make_item(10, Diagnosticity::High, Impact::Consistent, Some(30), Some(60));
    let c = engine.contribution(&item, &t1(), as_of());
    // 0.02 × 1.0 × 1.5
    assert!((c - 0.03).abs() < 1e-12, "got {c}");
}

#[test]
fn inconsistent_is_negative_with_same_magnitude() {
    let engine = EvidenceDecayEngine::default();
    let pos = make_item(10, Diagnosticity::Low, Impact::Consistent, Some(30), Some(60));
    let neg = make_item(10, Diagnosticity::Low, Impact::Inconsistent, Some(30), Some(60));
    let a = engine.contribution(&pos, &t1(), as_of());
    let b = engine.contribution(&neg, &t1(), as_of());
    assert!((a + b).abs() < 1e-12);
    assert!((a - 0.01).abs() < 1e-12);
}

#[test]
fn neutral_and_unmentioned_hypotheses_contribute_nothing() {
    let engine = EvidenceDecayEngine::default();
    let item = make_item(1, Diagnosticity::High, Impact::Neutral, None, None);
    assert_eq!(engine.contribution(&item, &t1(), as_of()), 0.0);
    assert_eq!(
        engine.contribution(&item, &HypothesisId::from("T4"), as_of()),
        0.0
    );
}

#[test]
fn inactive_items_are_excluded() {
    let engine = EvidenceDecayEngine::default();
    let mut item = make_item(1, Diagnosticity::High, Impact::Consistent, None, None);
    item.active = false;
    assert_eq!(engine.net_contribution(&[item.clone()], &t1(), as_of()), 0.0);
    assert!(engine.breakdown(&[item], &t1(), as_of()).is_empty());
}

#[test]
fn missing_parameters_fall_back_to_defaults() {
    let engine = EvidenceDecayEngine::default();
    // 210 days old: 120 days past the 90-day default window = one default half-life.
    let item = make_item(210, Diagnosticity::Medium, Impact::Consistent, None, None);
    let w = engine.temporal_weight(&item, as_of());
    assert!((w - 0.5).abs() < 1e-12, "got {w}");

    let zero_half_life = make_item(210, Diagnosticity::Medium, Impact::Consistent, None, Some(0));
    assert!((engine.temporal_weight(&zero_half_life, as_of()) - 0.5).abs() < 1e-12);
}

#[test]
fn net_contribution_sums_items() {
    let engine = EvidenceDecayEngine::default();
    let items = vec![
        make_item(5, Diagnosticity::High, Impact::Consistent, None, None),
        make_item(5, Diagnosticity::Medium, Impact::Inconsistent, None, None),
        make_item(5, Diagnosticity::Low, Impact::Consistent, None, None),
    ];
    let net = engine.net_contribution(&items, &t1(), as_of());
    // 0.03 - 0.02 + 0.01
    assert!((net - 0.02).abs() < 1e-12, "got {net}");
}

#[test]
fn breakdown_exposes_every_factor() {
    let config = DecayConfig::default();
    let item = make_item(150, Diagnosticity::High, Impact::Consistent, Some(30), Some(120));
    let b = formula::compute_breakdown(&item, &t1(), as_of(), &config);
    assert_eq!(b.evidence_id, "ev-150");
    assert_eq!(b.age_days, 150.0);
    assert!((b.temporal_weight - 0.5).abs() < 1e-12);
    assert_eq!(b.diagnosticity_multiplier, 1.5);
    assert!((b.contribution - 0.015).abs() < 1e-12);
}

#[test]
fn custom_step_is_respected() {
    let config = DecayConfig {
        evidence_step: 0.05,
        ..Default::default()
    };
    let engine = EvidenceDecayEngine::new(config);
    let item = make_item(0, Diagnosticity::Medium, Impact::Consistent, None, None);
    assert!((engine.contribution(&item, &t1(), as_of()) - 0.05).abs() < 1e-12);
}
