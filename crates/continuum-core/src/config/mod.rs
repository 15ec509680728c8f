//! Configuration system for Continuum.
//! TOML-based, layered resolution: env > file > compiled defaults.

pub mod blend_config;
pub mod continuum_config;
pub mod decay_config;
pub mod defaults;
pub mod dislocation_config;
pub mod engine_config;
pub mod inference_config;
pub mod observability_config;
pub mod storage_config;
pub mod survival_config;
pub mod tracking_config;

pub use blend_config::BlendConfig;
pub use continuum_config::ContinuumConfig;
pub use decay_config::DecayConfig;
pub use dislocation_config::{DislocationConfig, SeverityThresholds};
pub use engine_config::EngineConfig;
pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::{StorageBackend, StorageConfig};
pub use survival_config::{PriceMultipliers, SurvivalConfig};
pub use tracking_config::TrackingConfig;
