//! Compiled defaults shared by config structs and their tests.

// Evidence decay
pub const DEFAULT_EVIDENCE_STEP: f64 = 0.02;
pub const DEFAULT_HIGH_DIAGNOSTICITY: f64 = 1.5;
pub const DEFAULT_MEDIUM_DIAGNOSTICITY: f64 = 1.0;
pub const DEFAULT_LOW_DIAGNOSTICITY: f64 = 0.5;

// Survival
pub const DEFAULT_STALE_GRACE_DAYS: f64 = 14.0;
pub const DEFAULT_STALE_DECAY_PER_WEEK: f64 = 0.05;
pub const DEFAULT_STALE_FLOOR: f64 = 0.5;
pub const DEFAULT_LARGE_MOVE_PCT: f64 = 10.0;
pub const DEFAULT_MODERATE_MOVE_PCT: f64 = 5.0;
pub const DEFAULT_CHANGE_EPSILON: f64 = 0.005;

// Dominance
pub const DEFAULT_HIGH_DOMINANCE_GAP: f64 = 0.15;
pub const DEFAULT_MODERATE_DOMINANCE_GAP: f64 = 0.08;

// Storage / observability
pub const DEFAULT_DB_PATH: &str = "continuum.db";
pub const DEFAULT_LOG_LEVEL: &str = "info";
