//! Scoring-cycle errors.

use std::fmt;

use super::error_code::{self, ContinuumErrorCode};

/// Which required input an entity was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingData {
    Hypotheses,
    PriceObservation,
    Entity,
}

impl fmt::Display for MissingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hypotheses => write!(f, "no hypotheses"),
            Self::PriceObservation => write!(f, "no price observation"),
            Self::Entity => write!(f, "no entity record"),
        }
    }
}

/// Errors raised while running one entity's scoring cycle.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("entity {entity_id} skipped: {missing}")]
    MissingData {
        entity_id: String,
        missing: MissingData,
    },

    #[error("entity {entity_id} in invalid state: {reason}")]
    InvalidState { entity_id: String, reason: String },
}

impl CycleError {
    pub fn missing(entity_id: impl Into<String>, missing: MissingData) -> Self {
        Self::MissingData {
            entity_id: entity_id.into(),
            missing,
        }
    }

    /// Missing-data errors mean "skip and report", not "fail".
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::MissingData { .. })
    }
}

impl ContinuumErrorCode for CycleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingData { .. } => error_code::MISSING_DATA,
            Self::InvalidState { .. } => error_code::INVALID_STATE,
        }
    }
}
