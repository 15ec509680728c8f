use chrono::NaiveDate;
use serde::Serialize;

use continuum_blend::ContradictionSignals;
use continuum_core::models::{
    BlendTable, DislocationAssessment, DominanceConfidence, FlipRecord, HypothesisId,
    NarrativeInference,
};
use continuum_survival::SurvivalUpdate;

/// A persisted score change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreChange {
    pub hypothesis: HypothesisId,
    pub from: f64,
    pub to: f64,
}

impl ScoreChange {
    pub fn from_update(update: &SurvivalUpdate) -> Vec<Self> {
        update
            .changed()
            .map(|row| Self {
                hypothesis: row.id.clone(),
                from: row.prior,
                to: row.normalized,
            })
            .collect()
    }
}

/// Everything one cycle decided for one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    pub entity_id: String,
    pub date: NaiveDate,
    pub price: f64,
    /// The observation replaced a same-day price already in the history.
    pub price_replaced: bool,
    /// Move since the last review, percent.
    pub price_move_pct: Option<f64>,
    pub survival_changes: Vec<ScoreChange>,
    pub dislocation: DislocationAssessment,
    pub inference: NarrativeInference,
    pub blend: BlendTable,
    pub contradictions: ContradictionSignals,
    pub dominant: HypothesisId,
    pub dominance_confidence: DominanceConfidence,
    pub flip: Option<FlipRecord>,
    /// Live flip and history flip flag disagreed.
    pub flip_disagreement: bool,
}
