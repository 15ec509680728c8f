use crate::errors::SourceError;
use crate::models::PriceObservation;

/// Market-data collaborator. Implementations own all network I/O and retries.
pub trait IMarketDataSource: Send + Sync {
    /// `Ok(None)` means the provider has no observation for this entity today.
    fn observation(&self, entity_id: &str) -> Result<Option<PriceObservation>, SourceError>;
}

/// Optional news collaborator supplying free-text snippets.
pub trait INewsSource: Send + Sync {
    fn headlines(&self, entity_id: &str) -> Result<Vec<String>, SourceError>;
}

/// News source that never has anything to say.
pub struct NoNews;

impl INewsSource for NoNews {
    fn headlines(&self, _entity_id: &str) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }
}
