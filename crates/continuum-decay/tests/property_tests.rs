use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use continuum_core::models::{Diagnosticity, EvidenceItem, HypothesisId, Impact};
use continuum_decay::{factors, EvidenceDecayEngine};
use proptest::prelude::*;

fn item(full: u32, half: u32) -> EvidenceItem {
    EvidenceItem {
        id: "ev".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        source: "test".to_string(),
        diagnosticity: Diagnosticity::High,
        full_weight_days: Some(full),
        half_life_days: Some(half),
        impacts: BTreeMap::from([(HypothesisId::from("T1"), Impact::Consistent)]),
        active: true,
    }
}

proptest! {
    #[test]
    fn weight_is_non_increasing_in_age(
        full in 0u32..365,
        half in 1u32..720,
        d1 in 0i64..2000,
        extra in 0i64..2000,
    ) {
        let engine = EvidenceDecayEngine::default();
        let it = item(full, half);
        let start = it.date;
        let w1 = engine.temporal_weight(&it, start + Duration::days(d1));
        let w2 = engine.temporal_weight(&it, start + Duration::days(d1 + extra));
        prop_assert!(w1 >= w2, "weight({}) = {} < weight({}) = {}", d1, w1, d1 + extra, w2);
    }

    #[test]
    fn weight_bounded_zero_to_one(age in 0.0f64..10_000.0, full in 0.0f64..365.0, half in 1.0f64..720.0) {
        let w = factors::temporal::weight(age, full, half);
        prop_assert!(w > 0.0 || age > full, "zero weight inside window");
        prop_assert!((0.0..=1.0).contains(&w));
    }

    #[test]
    fn contribution_magnitude_never_exceeds_fresh_high_item(days in 0i64..3000) {
        let engine = EvidenceDecayEngine::default();
        let it = item(90, 120);
        let c = engine.contribution(&it, &HypothesisId::from("T1"), it.date + Duration::days(days));
        prop_assert!(c.abs() <= 0.03 + 1e-12);
    }
}
