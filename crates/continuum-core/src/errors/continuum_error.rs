//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::{self, ContinuumErrorCode};
use super::{ConfigError, CycleError, SourceError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum ContinuumError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Cycle error: {0}")]
    Cycle(#[from] CycleError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ContinuumError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl ContinuumErrorCode for ContinuumError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Cycle(e) => e.error_code(),
            Self::Source(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type ContinuumResult<T> = Result<T, ContinuumError>;
