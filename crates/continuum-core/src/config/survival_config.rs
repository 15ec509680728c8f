use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{SCORE_CEILING, SCORE_FLOOR};

/// Multipliers applied per sensitivity for one price-move band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceMultipliers {
    pub upside: f64,
    pub downside: f64,
    pub disruption: f64,
}

impl PriceMultipliers {
    pub const fn new(upside: f64, downside: f64, disruption: f64) -> Self {
        Self {
            upside,
            downside,
            disruption,
        }
    }
}

/// Survival scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalConfig {
    pub score_floor: f64,
    pub score_ceiling: f64,
    /// Days a hypothesis may go unupdated before it starts to decay.
    pub stale_grace_days: f64,
    /// Fraction lost per week past the grace period.
    pub stale_decay_per_week: f64,
    /// Lowest staleness multiplier.
    pub stale_floor: f64,
    pub large_move_pct: f64,
    pub moderate_move_pct: f64,
    /// Move below `-large_move_pct`.
    pub large_fall: PriceMultipliers,
    /// Move in `[-large_move_pct, -moderate_move_pct)`.
    pub moderate_fall: PriceMultipliers,
    /// Move in `(moderate_move_pct, large_move_pct]`.
    pub moderate_rise: PriceMultipliers,
    /// Move above `large_move_pct`.
    pub large_rise: PriceMultipliers,
    /// Score changes at or below this are not persisted.
    pub change_epsilon: f64,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            score_floor: SCORE_FLOOR,
            score_ceiling: SCORE_CEILING,
            stale_grace_days: defaults::DEFAULT_STALE_GRACE_DAYS,
            stale_decay_per_week: defaults::DEFAULT_STALE_DECAY_PER_WEEK,
            stale_floor: defaults::DEFAULT_STALE_FLOOR,
            large_move_pct: defaults::DEFAULT_LARGE_MOVE_PCT,
            moderate_move_pct: defaults::DEFAULT_MODERATE_MOVE_PCT,
            large_fall: PriceMultipliers::new(0.85, 1.15, 1.10),
            moderate_fall: PriceMultipliers::new(0.92, 1.08, 1.05),
            moderate_rise: PriceMultipliers::new(1.08, 0.92, 0.95),
            large_rise: PriceMultipliers::new(1.15, 0.85, 0.90),
            change_epsilon: defaults::DEFAULT_CHANGE_EPSILON,
        }
    }
}

impl SurvivalConfig {
    pub fn clamp(&self, score: f64) -> f64 {
        score.clamp(self.score_floor, self.score_ceiling)
    }
}
