use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a price dislocation. Ordered from calm to crisis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Normal,
    Moderate,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "NORMAL",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

/// Shape of the price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pattern {
    Normal,
    GapDown,
    Distribution,
    Capitulation,
    SteadyDecline,
    VolumeNoise,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "NORMAL",
            Self::GapDown => "GAP_DOWN",
            Self::Distribution => "DISTRIBUTION",
            Self::Capitulation => "CAPITULATION",
            Self::SteadyDecline => "STEADY_DECLINE",
            Self::VolumeNoise => "VOLUME_NOISE",
        };
        f.write_str(s)
    }
}

/// Raw statistics behind a dislocation classification.
///
/// Returns and drawdown are fractions (`-0.12` is a 12% fall).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DislocationMetrics {
    pub z_score: f64,
    pub today_return: f64,
    pub drawdown_from_peak: f64,
    pub volume_ratio: f64,
    /// Position inside the 52-week range, 0.0 (low) to 1.0 (high).
    pub range_position: f64,
    pub consecutive_down_days: u32,
}

impl DislocationMetrics {
    pub fn today_return_pct(&self) -> f64 {
        self.today_return * 100.0
    }

    pub fn drawdown_pct(&self) -> f64 {
        self.drawdown_from_peak * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DislocationAssessment {
    pub severity: Severity,
    pub pattern: Pattern,
    pub metrics: DislocationMetrics,
}
