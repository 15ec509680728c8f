use serde::{Deserialize, Serialize};

/// Any one driver at or above its threshold reaches the severity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    pub z_score: f64,
    pub drawdown: f64,
    pub volume_ratio: f64,
}

impl SeverityThresholds {
    pub const fn new(z_score: f64, drawdown: f64, volume_ratio: f64) -> Self {
        Self {
            z_score,
            drawdown,
            volume_ratio,
        }
    }
}

/// Dislocation detector thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DislocationConfig {
    pub critical: SeverityThresholds,
    pub high: SeverityThresholds,
    pub moderate: SeverityThresholds,
    pub gap_down_return: f64,
    pub gap_down_volume: f64,
    pub distribution_down_days: u32,
    pub distribution_range_position: f64,
    pub capitulation_return: f64,
    pub capitulation_volume: f64,
    pub steady_decline_days: u32,
    pub noise_return: f64,
    pub noise_volume: f64,
}

impl Default for DislocationConfig {
    fn default() -> Self {
        Self {
            critical: SeverityThresholds::new(3.0, 0.30, 3.0),
            high: SeverityThresholds::new(2.0, 0.20, 2.0),
            moderate: SeverityThresholds::new(1.5, 0.10, 1.5),
            gap_down_return: -0.05,
            gap_down_volume: 2.0,
            distribution_down_days: 5,
            distribution_range_position: 0.3,
            capitulation_return: -0.08,
            capitulation_volume: 3.0,
            steady_decline_days: 3,
            noise_return: 0.02,
            noise_volume: 1.5,
        }
    }
}
