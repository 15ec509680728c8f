use std::collections::BTreeMap;

use tracing::debug;

use continuum_core::models::HypothesisId;

/// Running per-slot scores plus the reasoning that produced them.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    scores: BTreeMap<HypothesisId, f64>,
    reasoning: Vec<String>,
}

impl Scoreboard {
    /// Start every known slot at zero.
    pub fn new<'a>(slots: impl IntoIterator<Item = &'a HypothesisId>) -> Self {
        Self {
            scores: slots.into_iter().map(|id| (id.clone(), 0.0)).collect(),
            reasoning: Vec::new(),
        }
    }

    /// Add `points` to `slot`. Slots the entity does not carry are ignored.
    pub fn add(&mut self, slot: &HypothesisId, points: f64, reason: impl Into<String>) -> bool {
        let reason = reason.into();
        match self.scores.get_mut(slot) {
            Some(score) => {
                *score += points;
                self.reasoning.push(format!("{slot} +{points:.1}: {reason}"));
                true
            }
            None => {
                debug!(%slot, points, reason = %reason, "role slot not present on entity");
                false
            }
        }
    }

    pub fn note(&mut self, line: impl Into<String>) {
        self.reasoning.push(line.into());
    }

    pub fn score(&self, slot: &HypothesisId) -> f64 {
        self.scores.get(slot).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    /// Slots by descending score; equal scores keep slot order.
    pub fn ranking(&self) -> Vec<(HypothesisId, f64)> {
        let mut ranked: Vec<(HypothesisId, f64)> =
            self.scores.iter().map(|(id, s)| (id.clone(), *s)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    pub fn into_parts(self) -> (BTreeMap<HypothesisId, f64>, Vec<String>) {
        (self.scores, self.reasoning)
    }
}
