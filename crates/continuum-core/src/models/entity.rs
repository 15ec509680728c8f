use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EvidenceItem, FlipRecord, Hypothesis, HypothesisId, PricePoint, Severity};

/// Confidence in the current dominant hypothesis, from its lead over the runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DominanceConfidence {
    #[default]
    Low,
    Moderate,
    High,
}

/// Alert level of the entity, driven by the latest dislocation severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertState {
    #[default]
    Normal,
    Watch,
    Alert,
    Critical,
}

impl From<Severity> for AlertState {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Normal => Self::Normal,
            Severity::Moderate => Self::Watch,
            Severity::High => Self::Alert,
            Severity::Critical => Self::Critical,
        }
    }
}

/// When research last reviewed the entity, and at what price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReviewMetadata {
    pub reviewed_at: DateTime<Utc>,
    pub price: f64,
}

/// A tracked instrument and its narrative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub hypotheses: BTreeMap<HypothesisId, Hypothesis>,
    #[serde(default)]
    pub dominant: Option<HypothesisId>,
    #[serde(default)]
    pub confidence: DominanceConfidence,
    #[serde(default)]
    pub alert_state: AlertState,
    /// Time-ascending, append-only.
    #[serde(default)]
    pub price_history: Vec<PricePoint>,
    #[serde(default)]
    pub review: Option<ReviewMetadata>,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
    #[serde(default)]
    pub last_flip: Option<FlipRecord>,
    #[serde(default)]
    pub narrative_history: Vec<FlipRecord>,
}

/// Outcome of appending a price point to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceAppend {
    Appended,
    /// Same date as the last point; the last point was replaced.
    Replaced,
    /// Older than the last point; history left untouched.
    Rejected,
}

impl Entity {
    pub fn new(id: impl Into<String>, hypotheses: Vec<Hypothesis>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            hypotheses: hypotheses.into_iter().map(|h| (h.id.clone(), h)).collect(),
            dominant: None,
            confidence: DominanceConfidence::Low,
            alert_state: AlertState::Normal,
            price_history: Vec::new(),
            review: None,
            evidence: Vec::new(),
            last_flip: None,
            narrative_history: Vec::new(),
        }
    }

    /// Current survival score per hypothesis, in slot order.
    pub fn scores(&self) -> BTreeMap<HypothesisId, f64> {
        self.hypotheses
            .iter()
            .map(|(id, h)| (id.clone(), h.survival_score))
            .collect()
    }

    pub fn score_sum(&self) -> f64 {
        self.hypotheses.values().map(|h| h.survival_score).sum()
    }

    pub fn score_of(&self, id: &HypothesisId) -> Option<f64> {
        self.hypotheses.get(id).map(|h| h.survival_score)
    }

    pub fn latest_price(&self) -> Option<&PricePoint> {
        self.price_history.last()
    }

    /// Append a closing price, keeping the history time-ascending.
    pub fn append_price(&mut self, point: PricePoint) -> PriceAppend {
        match self.price_history.last_mut() {
            Some(last) if last.date == point.date => {
                *last = point;
                PriceAppend::Replaced
            }
            Some(last) if last.date > point.date => PriceAppend::Rejected,
            _ => {
                self.price_history.push(point);
                PriceAppend::Appended
            }
        }
    }
}
