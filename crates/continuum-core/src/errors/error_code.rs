//! Stable error codes surfaced to callers and logs.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MISSING_DATA: &str = "MISSING_DATA";
pub const INVALID_STATE: &str = "INVALID_STATE";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Every Continuum error maps to one stable, machine-readable code.
pub trait ContinuumErrorCode {
    fn error_code(&self) -> &'static str;
}
