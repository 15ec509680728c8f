use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DislocationAssessment, HypothesisId, Severity};

/// Net lean of the hypothesis set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewClassification {
    Upside,
    Downside,
    Balanced,
}

/// Discrete event detected while logging a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NarrativeEvent {
    Flip {
        from: HypothesisId,
        to: HypothesisId,
    },
    SeverityEscalation {
        severity: Severity,
    },
    Contradiction {
        hypothesis: HypothesisId,
    },
    LargeScoreShift {
        hypothesis: HypothesisId,
        delta: f64,
    },
}

/// One per entity per day. Immutable except for same-day replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub date: NaiveDate,
    pub price: f64,
    pub scores: BTreeMap<HypothesisId, f64>,
    /// Hypothesis ids, highest score first.
    pub ranking: Vec<HypothesisId>,
    pub skew: i32,
    pub classification: SkewClassification,
    pub dominant: HypothesisId,
    pub flip: bool,
    pub dislocation: Option<DislocationAssessment>,
    #[serde(default)]
    pub events: Vec<NarrativeEvent>,
    /// blake3 of the snapshot inputs, hex.
    pub input_hash: String,
}
