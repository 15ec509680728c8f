//! # continuum-tracking
//!
//! Decides which hypothesis dominates, records flips on the entity, and
//! builds the daily [`HistorySnapshot`](continuum_core::models::HistorySnapshot).
//!
//! The live flip record (on the entity) and the history flip flag (against
//! the previous day's snapshot) are computed independently; the logger
//! reports when they disagree.

pub mod dominance;
pub mod events;
pub mod flip;
pub mod history;
pub mod skew;

pub use dominance::{DominanceAssessment, DominanceTracker};
pub use flip::{FlipTracker, TrackOutcome};
pub use history::{FlipDisagreement, HistoryLogger, HistoryRecord, SnapshotInput};
