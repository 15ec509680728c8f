//! Domain models shared by every engine crate.

pub mod blend;
pub mod dislocation;
pub mod entity;
pub mod evidence;
pub mod flip;
pub mod history;
pub mod hypothesis;
pub mod inference;
pub mod price;
pub mod profile;

pub use blend::{BlendConfidence, BlendTable, DivergenceContradiction, WeightBlend};
pub use dislocation::{DislocationAssessment, DislocationMetrics, Pattern, Severity};
pub use entity::{AlertState, DominanceConfidence, Entity, PriceAppend, ReviewMetadata};
pub use evidence::{Diagnosticity, EvidenceItem, Impact};
pub use flip::FlipRecord;
pub use history::{HistorySnapshot, NarrativeEvent, SkewClassification};
pub use hypothesis::{Direction, Hypothesis, HypothesisId, HypothesisStatus, Sensitivity};
pub use inference::NarrativeInference;
pub use price::{PriceObservation, PricePoint};
pub use profile::{InstrumentProfile, NarrativeRole, NarrativeRoles};
