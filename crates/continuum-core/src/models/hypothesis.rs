use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Slot identifier of a hypothesis within its entity (e.g. `T1`..`T4`).
///
/// Ordering is the slot order and is used as the deterministic tie-break
/// everywhere a ranking is computed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HypothesisId(pub String);

impl HypothesisId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HypothesisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HypothesisId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Which way the hypothesis points for the instrument. Drives skew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Upside,
    Downside,
    Neutral,
}

/// How the hypothesis reacts to price moves since the last review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    /// Weakened by falling prices (growth, recovery, turnaround).
    Upside,
    /// Strengthened by falling prices (risk, compression, erosion).
    Downside,
    /// Strengthened by falling prices, less strongly than downside.
    Disruption,
    /// Unaffected by price moves.
    Neutral,
}

/// Tier derived from the survival score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisStatus {
    Fading,
    Weak,
    Moderate,
    Strong,
}

impl HypothesisStatus {
    pub const STRONG: f64 = 0.40;
    pub const MODERATE: f64 = 0.25;
    pub const WEAK: f64 = 0.10;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::STRONG {
            Self::Strong
        } else if score >= Self::MODERATE {
            Self::Moderate
        } else if score >= Self::WEAK {
            Self::Weak
        } else {
            Self::Fading
        }
    }
}

/// One competing explanation for an instrument's trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,
    pub label: String,
    /// Normalized belief weight. Sums to 1.0 across the entity.
    pub survival_score: f64,
    pub status: HypothesisStatus,
    pub last_updated: DateTime<Utc>,
    pub direction: Direction,
    pub sensitivity: Sensitivity,
}

impl Hypothesis {
    pub fn new(
        id: impl Into<HypothesisId>,
        label: impl Into<String>,
        survival_score: f64,
        direction: Direction,
        sensitivity: Sensitivity,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            survival_score,
            status: HypothesisStatus::from_score(survival_score),
            last_updated,
            direction,
            sensitivity,
        }
    }

    /// Set a new score, refreshing the derived status and timestamp.
    pub fn set_score(&mut self, score: f64, now: DateTime<Utc>) {
        self.survival_score = score;
        self.status = HypothesisStatus::from_score(score);
        self.last_updated = now;
    }
}

impl From<String> for HypothesisId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
