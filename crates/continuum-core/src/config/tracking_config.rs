use serde::{Deserialize, Serialize};

use super::defaults;

/// Dominance, skew and history-event thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub high_confidence_gap: f64,
    pub moderate_confidence_gap: f64,
    /// Skew within `±skew_band` is balanced.
    pub skew_band: i32,
    /// Per-hypothesis score change that raises a `LargeScoreShift` event.
    pub score_shift_event: f64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            high_confidence_gap: defaults::DEFAULT_HIGH_DOMINANCE_GAP,
            moderate_confidence_gap: defaults::DEFAULT_MODERATE_DOMINANCE_GAP,
            skew_band: 10,
            score_shift_event: 0.10,
        }
    }
}
