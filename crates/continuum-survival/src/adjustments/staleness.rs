use chrono::{DateTime, Utc};
use continuum_core::config::SurvivalConfig;

/// Fractional days since `last_updated`. Never negative.
pub fn days_since(last_updated: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - last_updated).num_seconds().max(0) as f64 / 86400.0
}

/// Staleness multiplier: `max(floor, 1 - perWeek × ((days - grace) / 7))`
/// once past the grace period, else 1.0.
pub fn multiplier(days_unupdated: f64, config: &SurvivalConfig) -> f64 {
    if days_unupdated <= config.stale_grace_days {
        return 1.0;
    }
    let weeks_over = (days_unupdated - config.stale_grace_days) / 7.0;
    (1.0 - config.stale_decay_per_week * weeks_over).max(config.stale_floor)
}
