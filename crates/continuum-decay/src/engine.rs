use chrono::NaiveDate;
use continuum_core::config::DecayConfig;
use continuum_core::models::{EvidenceItem, HypothesisId};

use crate::factors::temporal;
use crate::formula::{self, EvidenceContribution};

/// Evidence decay engine: sums decayed evidence influence per hypothesis.
#[derive(Debug, Clone, Default)]
pub struct EvidenceDecayEngine {
    config: DecayConfig,
}

impl EvidenceDecayEngine {
    pub fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Temporal weight of an item on `as_of`, ignoring impact and diagnosticity.
    pub fn temporal_weight(&self, item: &EvidenceItem, as_of: NaiveDate) -> f64 {
        let (full_weight, half_life) = formula::decay_window(item, &self.config);
        temporal::weight(temporal::age_days(item.date, as_of), full_weight, half_life)
    }

    /// Signed contribution of a single item to a single hypothesis.
    pub fn contribution(
        &self,
        item: &EvidenceItem,
        hypothesis: &HypothesisId,
        as_of: NaiveDate,
    ) -> f64 {
        formula::compute(item, hypothesis, as_of, &self.config)
    }

    /// Net contribution of an evidence set to one hypothesis. Inactive items add nothing.
    pub fn net_contribution(
        &self,
        evidence: &[EvidenceItem],
        hypothesis: &HypothesisId,
        as_of: NaiveDate,
    ) -> f64 {
        evidence
            .iter()
            .filter(|item| item.active)
            .map(|item| formula::compute(item, hypothesis, as_of, &self.config))
            .sum()
    }

    /// Per-item breakdown for one hypothesis, skipping inactive items.
    pub fn breakdown(
        &self,
        evidence: &[EvidenceItem],
        hypothesis: &HypothesisId,
        as_of: NaiveDate,
    ) -> Vec<EvidenceContribution> {
        evidence
            .iter()
            .filter(|item| item.active)
            .map(|item| formula::compute_breakdown(item, hypothesis, as_of, &self.config))
            .collect()
    }
}
