//! # continuum-core
//!
//! Foundation crate for the Continuum narrative engine.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod migration;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ContinuumConfig;
pub use errors::{ContinuumError, ContinuumResult};
pub use models::{
    Direction, Entity, EvidenceItem, Hypothesis, HypothesisId, InstrumentProfile,
    PriceObservation, Sensitivity,
};
