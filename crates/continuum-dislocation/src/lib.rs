//! # continuum-dislocation
//!
//! Classifies today's price action for one instrument.
//!
//! Metrics are computed first ([`metrics`]), then graded on two independent
//! axes: [`severity`] (how unusual) and [`pattern`] (what shape).

pub mod detector;
pub mod metrics;
pub mod pattern;
pub mod severity;

pub use detector::DislocationDetector;
