/// Continuum engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound applied to every raw survival score before normalization.
pub const SCORE_FLOOR: f64 = 0.05;

/// Upper bound applied to every raw survival score before normalization.
pub const SCORE_CEILING: f64 = 0.95;

/// Tolerance for the per-entity sum-to-one invariant after 2dp rounding.
pub const SCORE_SUM_TOLERANCE: f64 = 0.01;

/// Fallback full-weight window for evidence missing decay parameters.
pub const DEFAULT_FULL_WEIGHT_DAYS: u32 = 90;

/// Fallback half-life for evidence missing decay parameters.
pub const DEFAULT_HALF_LIFE_DAYS: u32 = 120;

/// Short-term weight used when the inference engine has no signal for a hypothesis.
pub const DEFAULT_SHORT_TERM_WEIGHT: u32 = 25;

/// Share of the blended weight taken from the long-term (research) weight.
pub const DEFAULT_LONG_TERM_RATIO: f64 = 0.6;

/// Default environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "CONTINUUM_";
