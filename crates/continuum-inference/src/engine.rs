use std::collections::BTreeMap;

use tracing::debug;

use continuum_core::config::InferenceConfig;
use continuum_core::errors::{ContinuumResult, CycleError, MissingData};
use continuum_core::models::{
    DislocationAssessment, Entity, HypothesisId, InstrumentProfile, NarrativeInference,
};

use crate::scoreboard::Scoreboard;
use crate::{base_table, characteristics, news};

/// Narrative inference engine.
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    config: InferenceConfig,
}

impl InferenceEngine {
    pub fn new(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer which hypothesis the market is pricing for `entity`.
    pub fn infer(
        &self,
        entity: &Entity,
        assessment: &DislocationAssessment,
        profile: &InstrumentProfile,
        news_context: &[String],
    ) -> ContinuumResult<NarrativeInference> {
        if entity.hypotheses.is_empty() {
            return Err(CycleError::missing(&entity.id, MissingData::Hypotheses).into());
        }
        let cfg = &self.config;
        let metrics = &assessment.metrics;
        let roles = &profile.roles;

        let mut board = Scoreboard::new(entity.hypotheses.keys());

        let high_volume = metrics.volume_ratio > cfg.high_volume_ratio;
        let base = base_table::lookup(assessment.pattern, high_volume);
        board.add(
            roles.slot(base.primary),
            cfg.primary_points,
            format!("{} pattern primary", assessment.pattern),
        );
        if let Some(secondary) = base.secondary {
            board.add(
                roles.slot(secondary),
                cfg.secondary_points,
                format!("{} pattern secondary", assessment.pattern),
            );
        }

        let mut contradicted = characteristics::apply(&mut board, metrics, profile, cfg);

        let ranking = board.ranking();
        let (mut primary, top) = ranking[0].clone();
        let runner_up = ranking.get(1).filter(|(_, s)| *s > 0.0).cloned();
        let mut secondary = runner_up.as_ref().map(|(id, _)| id.clone());

        let gap = top - runner_up.as_ref().map_or(0.0, |(_, s)| *s);
        let bonus = if gap > cfg.wide_gap {
            cfg.wide_gap_bonus
        } else if gap > cfg.narrow_gap {
            cfg.narrow_gap_bonus
        } else {
            0.0
        };
        let confidence = (base.confidence + bonus).min(cfg.confidence_cap);

        let mut news_override = false;
        if cfg.news_override {
            if let Some(signal) = news::classify(news_context) {
                let slot = roles.slot(signal.primary);
                if entity.hypotheses.contains_key(slot) {
                    board.note(format!("news ({}) -> {slot}", signal.rule.describe()));
                    if *slot != primary {
                        secondary = Some(primary.clone());
                        primary = slot.clone();
                    }
                    if signal.contradicts_moat && entity.hypotheses.contains_key(&roles.moat) {
                        let gated = characteristics::contradict_moat(&mut board, profile, cfg);
                        if gated.is_some() {
                            contradicted = gated;
                        }
                    }
                    news_override = true;
                }
            }
        }
        if secondary.as_ref() == Some(&primary) {
            secondary = None;
        }
        if contradicted.as_ref() == Some(&primary) {
            contradicted = None;
        }

        let signals = signals(&board, entity, profile);
        let (scores, reasoning) = board.into_parts();

        debug!(
            entity_id = %entity.id,
            %primary,
            secondary = ?secondary,
            contradicted = ?contradicted,
            confidence,
            news_override,
            "narrative inferred"
        );

        Ok(NarrativeInference {
            primary,
            secondary,
            contradicted,
            confidence,
            reasoning,
            scores,
            signals,
            news_override,
        })
    }
}

/// Share of the total score per slot, integer percent. Falls back to the
/// profile's base weights when nothing scored.
fn signals(
    board: &Scoreboard,
    entity: &Entity,
    profile: &InstrumentProfile,
) -> BTreeMap<HypothesisId, u32> {
    let total = board.total();
    if total <= 0.0 {
        return entity
            .hypotheses
            .keys()
            .filter_map(|id| profile.base_weight(id).map(|w| (id.clone(), w)))
            .collect();
    }
    entity
        .hypotheses
        .keys()
        .map(|id| (id.clone(), (100.0 * board.score(id) / total).round() as u32))
        .collect()
}
