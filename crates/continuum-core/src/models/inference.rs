use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::HypothesisId;

/// Which hypothesis the market appears to be pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeInference {
    pub primary: HypothesisId,
    pub secondary: Option<HypothesisId>,
    /// Hypothesis contradicted by instrument characteristics or news.
    pub contradicted: Option<HypothesisId>,
    /// 0.0 – 0.95.
    pub confidence: f64,
    pub reasoning: Vec<String>,
    /// Additive score per hypothesis slot.
    pub scores: BTreeMap<HypothesisId, f64>,
    /// Short-horizon signal strength per hypothesis, integer percent.
    pub signals: BTreeMap<HypothesisId, u32>,
    /// True when news keywords replaced the price-derived selection.
    pub news_override: bool,
}

impl NarrativeInference {
    pub fn signal_for(&self, id: &HypothesisId) -> Option<u32> {
        self.signals.get(id).copied()
    }
}
