//! Raw statistics for a price observation.
//!
//! Degenerate inputs never error: each metric has a neutral fallback.

use statrs::statistics::Statistics;

use continuum_core::models::{DislocationMetrics, PriceObservation};

/// Fractional return from `previous` to `current`. 0.0 when `previous <= 0`.
pub fn today_return(current: f64, previous: f64) -> f64 {
    if previous <= 0.0 || !previous.is_finite() {
        return 0.0;
    }
    (current - previous) / previous
}

/// Z-score of `value` against a window of historical returns.
///
/// Uses the sample standard deviation. Fewer than two returns, or a zero or
/// non-finite deviation, yields 0.0.
pub fn z_score(value: f64, history: &[f64]) -> f64 {
    if history.len() < 2 {
        return 0.0;
    }
    let mean: f64 = history.iter().mean();
    let std_dev: f64 = history.iter().std_dev();
    if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
        return 0.0;
    }
    let z = (value - mean) / std_dev;
    if z.is_finite() {
        z
    } else {
        0.0
    }
}

/// Fractional fall from `peak`. 0.0 when `peak <= 0`.
pub fn drawdown(current: f64, peak: f64) -> f64 {
    if peak <= 0.0 || !peak.is_finite() {
        return 0.0;
    }
    (peak - current) / peak
}

/// Today's volume over the trailing average. 1.0 when the average is unusable.
pub fn volume_ratio(today: f64, average: f64) -> f64 {
    if average <= 0.0 || !average.is_finite() {
        return 1.0;
    }
    today / average
}

/// Position of `current` inside the 52-week range, clamped to [0, 1].
pub fn range_position(current: f64, low: f64, high: f64) -> f64 {
    if high <= low {
        return 0.5;
    }
    ((current - low) / (high - low)).clamp(0.0, 1.0)
}

pub fn compute(observation: &PriceObservation) -> DislocationMetrics {
    let ret = today_return(observation.current, observation.previous);
    DislocationMetrics {
        z_score: z_score(ret, &observation.historical_returns),
        today_return: ret,
        drawdown_from_peak: drawdown(observation.current, observation.peak),
        volume_ratio: volume_ratio(observation.volume_today, observation.volume_avg),
        range_position: range_position(
            observation.current,
            observation.low_52w,
            observation.high_52w,
        ),
        consecutive_down_days: observation.consecutive_down_days,
    }
}
