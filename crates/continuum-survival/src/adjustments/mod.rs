pub mod price;
pub mod staleness;
