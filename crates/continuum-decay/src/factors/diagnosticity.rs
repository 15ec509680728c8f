use continuum_core::config::DecayConfig;
use continuum_core::models::Diagnosticity;

/// Diagnosticity multiplier: HIGH 1.5, MEDIUM 1.0, LOW 0.5 by default.
pub fn multiplier(diagnosticity: Diagnosticity, config: &DecayConfig) -> f64 {
    match diagnosticity {
        Diagnosticity::High => config.high_multiplier,
        Diagnosticity::Medium => config.medium_multiplier,
        Diagnosticity::Low => config.low_multiplier,
    }
}
