use chrono::NaiveDate;
use continuum_core::config::DecayConfig;
use continuum_core::models::{EvidenceItem, HypothesisId, Impact};

use crate::factors::{diagnosticity, temporal};

/// Signed score contribution of one evidence item to one hypothesis.
///
/// ```text
/// contribution = ±step × temporalWeight × diagnosticityMultiplier
/// ```
///
/// CONSISTENT is positive, INCONSISTENT negative, NEUTRAL and inactive zero.
pub fn compute(
    item: &EvidenceItem,
    hypothesis: &HypothesisId,
    as_of: NaiveDate,
    config: &DecayConfig,
) -> f64 {
    compute_breakdown(item, hypothesis, as_of, config).contribution
}

/// `(full_weight_days, half_life_days)` for an item, with config fallbacks
/// for missing parameters. A zero half-life counts as missing.
pub fn decay_window(item: &EvidenceItem, config: &DecayConfig) -> (f64, f64) {
    let full_weight = item
        .full_weight_days
        .unwrap_or(config.default_full_weight_days);
    let half_life = match item.half_life_days {
        Some(days) if days > 0 => days,
        _ => config.default_half_life_days,
    };
    (full_weight as f64, half_life as f64)
}

/// Each factor of an evidence contribution, for audit trails.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceContribution {
    pub evidence_id: String,
    pub impact: Impact,
    pub age_days: f64,
    pub temporal_weight: f64,
    pub diagnosticity_multiplier: f64,
    pub contribution: f64,
}

/// Compute an evidence contribution with a full breakdown of each factor.
pub fn compute_breakdown(
    item: &EvidenceItem,
    hypothesis: &HypothesisId,
    as_of: NaiveDate,
    config: &DecayConfig,
) -> EvidenceContribution {
    let impact = item.impact_on(hypothesis);
    let age = temporal::age_days(item.date, as_of);
    let (full_weight, half_life) = decay_window(item, config);
    let weight = temporal::weight(age, full_weight, half_life);
    let multiplier = diagnosticity::multiplier(item.diagnosticity, config);

    let sign = match impact {
        _ if !item.active => 0.0,
        Impact::Consistent => 1.0,
        Impact::Inconsistent => -1.0,
        Impact::Neutral => 0.0,
    };

    EvidenceContribution {
        evidence_id: item.id.clone(),
        impact,
        age_days: age,
        temporal_weight: weight,
        diagnosticity_multiplier: multiplier,
        contribution: sign * config.evidence_step * weight * multiplier,
    }
}
