use continuum_core::models::{NarrativeRole, Pattern};

/// Seed roles and confidence for one pattern/volume cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseRow {
    pub primary: NarrativeRole,
    pub secondary: Option<NarrativeRole>,
    pub confidence: f64,
}

const fn row(primary: NarrativeRole, secondary: Option<NarrativeRole>, confidence: f64) -> BaseRow {
    BaseRow {
        primary,
        secondary,
        confidence,
    }
}

/// Look up the base row. `high_volume` is volume ratio above the configured split.
pub fn lookup(pattern: Pattern, high_volume: bool) -> BaseRow {
    use NarrativeRole::*;
    match (pattern, high_volume) {
        (Pattern::GapDown, true) => row(Competition, Some(Valuation), 0.70),
        (Pattern::GapDown, false) => row(Valuation, Some(Growth), 0.55),
        (Pattern::Distribution, true) => row(Valuation, Some(Competition), 0.60),
        (Pattern::Distribution, false) => row(Valuation, Some(Growth), 0.50),
        (Pattern::Capitulation, true) => row(Competition, Some(Growth), 0.75),
        (Pattern::Capitulation, false) => row(Growth, Some(Valuation), 0.60),
        (Pattern::SteadyDecline, true) => row(Growth, Some(Valuation), 0.55),
        (Pattern::SteadyDecline, false) => row(Growth, Some(Valuation), 0.50),
        (Pattern::VolumeNoise, _) => row(Valuation, None, 0.35),
        (Pattern::Normal, _) => row(Growth, Some(Moat), 0.40),
    }
}
