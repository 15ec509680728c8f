//! Error handling for Continuum.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod continuum_error;
pub mod cycle_error;
pub mod error_code;
pub mod source_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use continuum_error::{ContinuumError, ContinuumResult};
pub use cycle_error::{CycleError, MissingData};
pub use error_code::ContinuumErrorCode;
pub use source_error::SourceError;
pub use storage_error::StorageError;
