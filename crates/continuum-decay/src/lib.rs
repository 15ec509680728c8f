//! # continuum-decay
//!
//! Converts dated, labeled evidence into a time-weighted influence on each
//! hypothesis: full weight for a fresh window, exponential half-life decay
//! after it, scaled by diagnosticity.

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::EvidenceDecayEngine;
pub use formula::EvidenceContribution;
