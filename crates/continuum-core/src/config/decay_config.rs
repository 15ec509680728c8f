use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{DEFAULT_FULL_WEIGHT_DAYS, DEFAULT_HALF_LIFE_DAYS};

/// Evidence decay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Score moved by one full-weight, medium-diagnosticity item.
    pub evidence_step: f64,
    /// Used when an item has no `full_weight_days`.
    pub default_full_weight_days: u32,
    /// Used when an item has no (or a zero) `half_life_days`.
    pub default_half_life_days: u32,
    pub high_multiplier: f64,
    pub medium_multiplier: f64,
    pub low_multiplier: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            evidence_step: defaults::DEFAULT_EVIDENCE_STEP,
            default_full_weight_days: DEFAULT_FULL_WEIGHT_DAYS,
            default_half_life_days: DEFAULT_HALF_LIFE_DAYS,
            high_multiplier: defaults::DEFAULT_HIGH_DIAGNOSTICITY,
            medium_multiplier: defaults::DEFAULT_MEDIUM_DIAGNOSTICITY,
            low_multiplier: defaults::DEFAULT_LOW_DIAGNOSTICITY,
        }
    }
}
