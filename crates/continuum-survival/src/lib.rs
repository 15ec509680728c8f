//! # continuum-survival
//!
//! Recomputes per-hypothesis survival scores for one entity.
//!
//! ## Steps (each clamped to [0.05, 0.95])
//! 1. **Staleness**: ~5%/week loss after a 14-day grace period, floor 0.5×
//! 2. **Evidence**: net decayed evidence contribution
//! 3. **Price**: sensitivity-tagged multiplier from the move since last review
//! 4. **Normalize**: scores sum to 1.0, rounded to 2dp

pub mod adjustments;
pub mod engine;
pub mod normalize;

pub use engine::{HypothesisBreakdown, SurvivalEngine, SurvivalUpdate};
