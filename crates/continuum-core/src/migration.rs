//! One-time migration of legacy hypothesis records that carry no explicit
//! sensitivity or direction tag.
//!
//! Label keywords are only consulted here. Runtime scoring reads the tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Direction, Hypothesis, HypothesisId, Sensitivity};

const UPSIDE_KEYWORDS: &[&str] = &["growth", "recovery", "turnaround", "expansion"];
const DOWNSIDE_KEYWORDS: &[&str] = &[
    "risk",
    "downside",
    "compression",
    "erosion",
    "decline",
    "squeeze",
];
const DISRUPTION_KEYWORDS: &[&str] = &["disruption"];

/// A hypothesis as stored before sensitivity tags existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyHypothesis {
    pub id: HypothesisId,
    pub label: String,
    pub survival_score: f64,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Infer price sensitivity from a label. Upside keywords win over downside,
/// which win over disruption.
pub fn infer_sensitivity(label: &str) -> Sensitivity {
    let label = label.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| label.contains(w));

    if has(UPSIDE_KEYWORDS) {
        Sensitivity::Upside
    } else if has(DOWNSIDE_KEYWORDS) {
        Sensitivity::Downside
    } else if has(DISRUPTION_KEYWORDS) {
        Sensitivity::Disruption
    } else {
        Sensitivity::Neutral
    }
}

/// Direction implied by a sensitivity when the legacy record had none.
pub fn direction_for(sensitivity: Sensitivity) -> Direction {
    match sensitivity {
        Sensitivity::Upside => Direction::Upside,
        Sensitivity::Downside | Sensitivity::Disruption => Direction::Downside,
        Sensitivity::Neutral => Direction::Neutral,
    }
}

/// Convert a legacy record into a tagged hypothesis.
pub fn migrate_hypothesis(legacy: LegacyHypothesis, now: DateTime<Utc>) -> Hypothesis {
    let sensitivity = infer_sensitivity(&legacy.label);
    let direction = legacy.direction.unwrap_or_else(|| direction_for(sensitivity));
    Hypothesis::new(
        legacy.id,
        legacy.label,
        legacy.survival_score,
        direction,
        sensitivity,
        legacy.last_updated.unwrap_or(now),
    )
}
