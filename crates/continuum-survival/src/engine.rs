use chrono::{DateTime, Utc};
use tracing::debug;

use continuum_core::config::{DecayConfig, SurvivalConfig};
use continuum_core::errors::{ContinuumResult, CycleError, MissingData};
use continuum_core::models::{Entity, HypothesisId};
use continuum_decay::EvidenceDecayEngine;

use crate::adjustments::{price, staleness};
use crate::normalize;

/// Every intermediate value of one hypothesis' recalculation.
#[derive(Debug, Clone, PartialEq)]
pub struct HypothesisBreakdown {
    pub id: HypothesisId,
    pub prior: f64,
    pub days_unupdated: f64,
    pub staleness_multiplier: f64,
    pub after_staleness: f64,
    pub evidence_delta: f64,
    pub after_evidence: f64,
    pub price_multiplier: f64,
    pub after_price: f64,
    pub normalized: f64,
    /// Differs from the prior by more than the change epsilon.
    pub changed: bool,
}

/// Result of a recalculation, not yet applied to the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct SurvivalUpdate {
    pub entity_id: String,
    /// Move since the last review, percent. `None` without a review price.
    pub price_move_pct: Option<f64>,
    /// In slot order.
    pub rows: Vec<HypothesisBreakdown>,
}

impl SurvivalUpdate {
    pub fn changed(&self) -> impl Iterator<Item = &HypothesisBreakdown> {
        self.rows.iter().filter(|r| r.changed)
    }

    pub fn changed_count(&self) -> usize {
        self.changed().count()
    }

    pub fn normalized_sum(&self) -> f64 {
        self.rows.iter().map(|r| r.normalized).sum()
    }
}

/// Survival scoring engine.
#[derive(Debug, Clone, Default)]
pub struct SurvivalEngine {
    config: SurvivalConfig,
    decay: EvidenceDecayEngine,
}

impl SurvivalEngine {
    pub fn new(config: SurvivalConfig, decay: DecayConfig) -> Self {
        Self {
            config,
            decay: EvidenceDecayEngine::new(decay),
        }
    }

    pub fn config(&self) -> &SurvivalConfig {
        &self.config
    }

    pub fn decay(&self) -> &EvidenceDecayEngine {
        &self.decay
    }

    /// Recompute every hypothesis score for `entity` without mutating it.
    ///
    /// `latest_price` is compared against the entity's last review price.
    pub fn recalculate(
        &self,
        entity: &Entity,
        latest_price: Option<f64>,
        now: DateTime<Utc>,
    ) -> ContinuumResult<SurvivalUpdate> {
        if entity.hypotheses.is_empty() {
            return Err(CycleError::missing(&entity.id, MissingData::Hypotheses).into());
        }

        let as_of = now.date_naive();
        let move_pct = price::move_pct(latest_price, entity.review.map(|r| r.price));

        let mut rows: Vec<HypothesisBreakdown> = entity
            .hypotheses
            .values()
            .map(|h| {
                let prior = h.survival_score;
                let days = staleness::days_since(h.last_updated, now);
                let stale = staleness::multiplier(days, &self.config);
                let after_staleness = self.config.clamp(prior * stale);

                let evidence_delta = self.decay.net_contribution(&entity.evidence, &h.id, as_of);
                let after_evidence = self.config.clamp(after_staleness + evidence_delta);

                let price_mult = price::multiplier(h.sensitivity, move_pct, &self.config);
                let after_price = self.config.clamp(after_evidence * price_mult);

                HypothesisBreakdown {
                    id: h.id.clone(),
                    prior,
                    days_unupdated: days,
                    staleness_multiplier: stale,
                    after_staleness,
                    evidence_delta,
                    after_evidence,
                    price_multiplier: price_mult,
                    after_price,
                    normalized: 0.0,
                    changed: false,
                }
            })
            .collect();

        let raw: Vec<f64> = rows.iter().map(|r| r.after_price).collect();
        for (row, score) in rows.iter_mut().zip(normalize::normalize(&raw)) {
            row.normalized = score;
            row.changed = (score - row.prior).abs() > self.config.change_epsilon;
            debug!(
                entity_id = %entity.id,
                hypothesis = %row.id,
                prior = row.prior,
                staleness = row.staleness_multiplier,
                evidence = row.evidence_delta,
                price = row.price_multiplier,
                normalized = row.normalized,
                "survival recalculated"
            );
        }

        Ok(SurvivalUpdate {
            entity_id: entity.id.clone(),
            price_move_pct: move_pct,
            rows,
        })
    }

    /// Persist changed scores onto the entity. Unchanged hypotheses keep
    /// their prior score and `last_updated`. Returns the number changed.
    pub fn apply(&self, entity: &mut Entity, update: &SurvivalUpdate, now: DateTime<Utc>) -> usize {
        let mut changed = 0;
        for row in update.changed() {
            if let Some(h) = entity.hypotheses.get_mut(&row.id) {
                h.set_score(row.normalized, now);
                changed += 1;
            }
        }
        changed
    }

    /// Recalculate and apply in one step.
    pub fn recalculate_and_apply(
        &self,
        entity: &mut Entity,
        latest_price: Option<f64>,
        now: DateTime<Utc>,
    ) -> ContinuumResult<SurvivalUpdate> {
        let update = self.recalculate(entity, latest_price, now)?;
        self.apply(entity, &update, now);
        Ok(update)
    }
}
