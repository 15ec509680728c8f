use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One closing price in an entity's append-only price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Ephemeral market input for one scoring cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub date: NaiveDate,
    pub current: f64,
    pub previous: f64,
    pub high_52w: f64,
    pub low_52w: f64,
    /// Highest price the drawdown is measured from.
    pub peak: f64,
    pub volume_today: f64,
    /// Trailing-average daily volume.
    pub volume_avg: f64,
    /// Window of historical daily returns as fractions.
    #[serde(default)]
    pub historical_returns: Vec<f64>,
    #[serde(default)]
    pub consecutive_down_days: u32,
}

impl PriceObservation {
    pub fn point(&self) -> PricePoint {
        PricePoint {
            date: self.date,
            price: self.current,
        }
    }
}
