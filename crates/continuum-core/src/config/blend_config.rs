use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LONG_TERM_RATIO, DEFAULT_SHORT_TERM_WEIGHT};

/// Weight blending configuration. The ratio is global, never per entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    /// Share of the blend taken from the long-term weight. Short-term gets the rest.
    pub long_term_ratio: f64,
    pub default_short_term: u32,
    /// Divergence above this is LOW confidence.
    pub low_confidence_divergence: u32,
    /// Divergence above this is MEDIUM confidence.
    pub medium_confidence_divergence: u32,
    /// Long-term weight a hypothesis must exceed to be contradicted.
    pub contradiction_long_term_min: u32,
    /// Short-term weight a contradicted hypothesis must fall below.
    pub contradiction_short_term_max: u32,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            long_term_ratio: DEFAULT_LONG_TERM_RATIO,
            default_short_term: DEFAULT_SHORT_TERM_WEIGHT,
            low_confidence_divergence: 40,
            medium_confidence_divergence: 25,
            contradiction_long_term_min: 30,
            contradiction_short_term_max: 15,
        }
    }
}

impl BlendConfig {
    pub fn short_term_ratio(&self) -> f64 {
        1.0 - self.long_term_ratio
    }
}
