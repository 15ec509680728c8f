//! # continuum-blend
//!
//! Long-term weights come from survival scores, short-term weights from
//! narrative inference signals. The split is global configuration.

pub mod blender;
pub mod contradiction;

pub use blender::WeightBlender;
pub use contradiction::{ContradictionAgreement, ContradictionSignals};
