/// Storage-layer errors for entity and history persistence.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt record for entity {entity_id}: {details}")]
    CorruptRecord { entity_id: String, details: String },

    #[error("storage lock poisoned: {details}")]
    LockPoisoned { details: String },
}

impl super::ContinuumErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        super::error_code::STORAGE_ERROR
    }
}
