use std::collections::BTreeMap;

use continuum_core::config::TrackingConfig;
use continuum_core::models::{DominanceConfidence, HypothesisId};

/// Which hypothesis leads, and by how much.
#[derive(Debug, Clone, PartialEq)]
pub struct DominanceAssessment {
    pub dominant: HypothesisId,
    pub score: f64,
    pub runner_up: Option<HypothesisId>,
    /// Lead over the runner-up; the full score when there is none.
    pub gap: f64,
    pub confidence: DominanceConfidence,
}

/// Hypothesis ids by descending score. Equal scores keep slot order.
pub fn ranking(scores: &BTreeMap<HypothesisId, f64>) -> Vec<HypothesisId> {
    let mut ranked: Vec<(&HypothesisId, f64)> = scores.iter().map(|(id, s)| (id, *s)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(id, _)| id.clone()).collect()
}

#[derive(Debug, Clone, Default)]
pub struct DominanceTracker {
    config: TrackingConfig,
}

impl DominanceTracker {
    pub fn new(config: TrackingConfig) -> Self {
        Self { config }
    }

    pub fn tier(&self, gap: f64) -> DominanceConfidence {
        if gap >= self.config.high_confidence_gap {
            DominanceConfidence::High
        } else if gap >= self.config.moderate_confidence_gap {
            DominanceConfidence::Moderate
        } else {
            DominanceConfidence::Low
        }
    }

    /// `None` for an empty score map.
    pub fn assess(&self, scores: &BTreeMap<HypothesisId, f64>) -> Option<DominanceAssessment> {
        let ranked = ranking(scores);
        let dominant = ranked.first()?.clone();
        let score = scores.get(&dominant).copied().unwrap_or(0.0);
        let runner_up = ranked.get(1).cloned();
        let gap = score - runner_up.as_ref().and_then(|r| scores.get(r)).copied().unwrap_or(0.0);
        Some(DominanceAssessment {
            dominant,
            score,
            runner_up,
            gap,
            confidence: self.tier(gap),
        })
    }
}
