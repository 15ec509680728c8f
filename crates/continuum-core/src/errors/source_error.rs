//! Errors reported by external data collaborators (market data, news).
//!
//! Kept apart from computation errors so a batch report can tell a provider
//! outage from a scoring failure.

use super::error_code::{self, ContinuumErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{source_name} unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },

    #[error("{source_name} returned malformed data for {entity_id}: {reason}")]
    Malformed {
        source_name: String,
        entity_id: String,
        reason: String,
    },
}

impl ContinuumErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::SOURCE_ERROR
    }
}
