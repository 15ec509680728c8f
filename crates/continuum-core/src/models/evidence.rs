use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::HypothesisId;

/// How strongly a piece of evidence discriminates between hypotheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Diagnosticity {
    High,
    Medium,
    Low,
}

/// Effect of an evidence item on one hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    Consistent,
    Inconsistent,
    Neutral,
}

/// A dated research input. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub id: String,
    pub date: NaiveDate,
    pub source: String,
    pub diagnosticity: Diagnosticity,
    /// Missing decay parameters fall back to `DecayConfig` defaults.
    #[serde(default)]
    pub full_weight_days: Option<u32>,
    #[serde(default)]
    pub half_life_days: Option<u32>,
    #[serde(default)]
    pub impacts: BTreeMap<HypothesisId, Impact>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl EvidenceItem {
    /// Impact on `hypothesis`; hypotheses the item doesn't mention are neutral.
    pub fn impact_on(&self, hypothesis: &HypothesisId) -> Impact {
        self.impacts
            .get(hypothesis)
            .copied()
            .unwrap_or(Impact::Neutral)
    }
}
