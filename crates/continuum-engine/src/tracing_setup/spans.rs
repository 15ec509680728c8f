//! Span definitions per operation: cycle, batch, storage.

/// Create a cycle span.
#[macro_export]
macro_rules! cycle_span {
    ($entity_id:expr, $date:expr) => {
        tracing::info_span!("continuum.cycle", entity_id = %$entity_id, date = %$date)
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($run_id:expr, $entity_count:expr) => {
        tracing::info_span!("continuum.batch", run_id = %$run_id, entity_count = $entity_count)
    };
}

/// Create a storage span.
#[macro_export]
macro_rules! storage_span {
    ($operation:expr, $entity_id:expr) => {
        tracing::debug_span!("continuum.storage", operation = $operation, entity_id = %$entity_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CYCLE: &str = "continuum.cycle";
    pub const BATCH: &str = "continuum.batch";
    pub const STORAGE: &str = "continuum.storage";
}
