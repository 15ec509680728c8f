use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::HypothesisId;

/// A change of dominant hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlipRecord {
    pub date: NaiveDate,
    pub from: HypothesisId,
    pub to: HypothesisId,
    /// Human-readable cause (price pattern, inference, evidence).
    pub trigger: String,
    pub price: f64,
    pub from_score: f64,
    pub to_score: f64,
}
