//! Raw SQL operations. Bodies are JSON; corrupt bodies surface as
//! `StorageError::CorruptRecord`.

pub mod entity_ops;
pub mod history_ops;
