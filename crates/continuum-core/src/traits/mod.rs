//! Collaborator traits. The engine depends on these, never on a concrete store or provider.

pub mod market_data;
pub mod storage;

pub use market_data::{IMarketDataSource, INewsSource, NoNews};
pub use storage::{ICycleStore, IEntityStore, IHistoryLog, LogWrite};
