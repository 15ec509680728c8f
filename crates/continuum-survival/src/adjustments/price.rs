use continuum_core::config::{PriceMultipliers, SurvivalConfig};
use continuum_core::models::Sensitivity;

/// Percentage move from the last reviewed price. `None` without a usable review price.
pub fn move_pct(latest: Option<f64>, reviewed: Option<f64>) -> Option<f64> {
    match (latest, reviewed) {
        (Some(latest), Some(reviewed)) if reviewed > 0.0 && latest.is_finite() => {
            Some((latest - reviewed) / reviewed * 100.0)
        }
        _ => None,
    }
}

/// Multiplier band for a move, or `None` inside the ±moderate dead zone.
///
/// Falls: `< -large` is large, `[-large, -moderate)` is moderate.
/// Rises: `> large` is large, `(moderate, large]` is moderate.
pub fn band(move_pct: f64, config: &SurvivalConfig) -> Option<&PriceMultipliers> {
    if move_pct < -config.large_move_pct {
        Some(&config.large_fall)
    } else if move_pct < -config.moderate_move_pct {
        Some(&config.moderate_fall)
    } else if move_pct > config.large_move_pct {
        Some(&config.large_rise)
    } else if move_pct > config.moderate_move_pct {
        Some(&config.moderate_rise)
    } else {
        None
    }
}

/// Multiplier for one hypothesis given the price move.
pub fn multiplier(sensitivity: Sensitivity, move_pct: Option<f64>, config: &SurvivalConfig) -> f64 {
    let Some(band) = move_pct.and_then(|m| band(m, config)) else {
        return 1.0;
    };
    match sensitivity {
        Sensitivity::Upside => band.upside,
        Sensitivity::Downside => band.downside,
        Sensitivity::Disruption => band.disruption,
        Sensitivity::Neutral => 1.0,
    }
}
