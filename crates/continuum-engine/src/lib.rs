//! # continuum-engine
//!
//! Runs the per-entity scoring cycle and isolates entities from each other
//! in batches.
//!
//! ```text
//! observation ─► survival ─► dislocation ─► inference ─► blend ─► dominance/flip ─► snapshot
//! ```

pub mod batch;
pub mod cycle;
pub mod report;
pub mod tracing_setup;

pub use batch::{BatchReport, BatchRunner, EntityOutcome, EntityResult};
pub use cycle::{CycleInput, CycleOutcome, NarrativeEngine};
pub use report::{CycleReport, ScoreChange};
