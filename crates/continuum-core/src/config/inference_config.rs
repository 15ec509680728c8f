use serde::{Deserialize, Serialize};

/// Narrative inference scoring weights and thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub primary_points: f64,
    pub secondary_points: f64,
    /// Volume ratio above which the high-volume base row is used.
    pub high_volume_ratio: f64,

    pub multiple_drawdown: f64,
    pub multiple_points: f64,
    pub deep_multiple_drawdown: f64,
    pub deep_multiple_points: f64,

    pub disruption_return: f64,
    pub disruption_points: f64,
    pub severe_disruption_return: f64,
    pub severe_disruption_drawdown: f64,
    pub severe_disruption_points: f64,
    pub disruption_drawdown: f64,
    pub disruption_drawdown_points: f64,

    pub growth_down_days: u32,
    pub growth_points: f64,

    pub collapse_drawdown: f64,
    pub collapse_points: f64,

    /// Minimum base weight for the moat hypothesis to be contradicted.
    pub bullish_base_weight: u32,

    pub confidence_cap: f64,
    pub wide_gap: f64,
    pub wide_gap_bonus: f64,
    pub narrow_gap: f64,
    pub narrow_gap_bonus: f64,

    /// Let news keywords replace the price-derived primary.
    pub news_override: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            primary_points: 3.0,
            secondary_points: 1.5,
            high_volume_ratio: 2.0,
            multiple_drawdown: 0.20,
            multiple_points: 2.5,
            deep_multiple_drawdown: 0.40,
            deep_multiple_points: 1.5,
            disruption_return: -0.05,
            disruption_points: 3.0,
            severe_disruption_return: -0.15,
            severe_disruption_drawdown: 0.50,
            severe_disruption_points: 2.0,
            disruption_drawdown: 0.30,
            disruption_drawdown_points: 2.0,
            growth_down_days: 5,
            growth_points: 2.0,
            collapse_drawdown: 0.50,
            collapse_points: 1.0,
            bullish_base_weight: 40,
            confidence_cap: 0.95,
            wide_gap: 3.0,
            wide_gap_bonus: 0.10,
            narrow_gap: 1.0,
            narrow_gap_bonus: 0.05,
            news_override: true,
        }
    }
}
