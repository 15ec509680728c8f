//! Top-level Continuum configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    BlendConfig, DecayConfig, DislocationConfig, EngineConfig, InferenceConfig,
    ObservabilityConfig, StorageBackend, StorageConfig, SurvivalConfig, TrackingConfig,
};
use crate::constants::ENV_PREFIX;
use crate::errors::ConfigError;
use crate::models::InstrumentProfile;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CONTINUUM_*`)
/// 2. Config file (`continuum.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContinuumConfig {
    pub decay: DecayConfig,
    pub survival: SurvivalConfig,
    pub dislocation: DislocationConfig,
    pub inference: InferenceConfig,
    pub blend: BlendConfig,
    pub tracking: TrackingConfig,
    pub engine: EngineConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
    /// Instrument characteristics keyed by entity id.
    pub instruments: BTreeMap<String, InstrumentProfile>,
}

impl ContinuumConfig {
    /// Load configuration: defaults, then `path` if it exists, then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if p.exists() => Self::from_file(p)?,
            Some(p) => {
                return Err(ConfigError::FileNotFound {
                    path: p.display().to_string(),
                })
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Instrument profile for an entity, or the all-false default.
    pub fn profile_for(&self, entity_id: &str) -> InstrumentProfile {
        self.instruments.get(entity_id).cloned().unwrap_or_default()
    }

    /// Apply `CONTINUUM_*` overrides read through `lookup`.
    ///
    /// Unparseable values are ignored and the previous value is kept.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("LOG_LEVEL") {
            self.observability.log_level = v;
        }
        if let Some(v) = var("LOG_JSON").and_then(|v| v.parse::<bool>().ok()) {
            self.observability.json_logs = v;
        }
        if let Some(v) = var("DB_PATH") {
            self.storage.db_path = v;
        }
        if let Some(v) = var("STORAGE_BACKEND") {
            match v.to_ascii_lowercase().as_str() {
                "memory" => self.storage.backend = StorageBackend::Memory,
                "sqlite" => self.storage.backend = StorageBackend::Sqlite,
                _ => {}
            }
        }
        if let Some(v) = var("ENGINE_PARALLEL").and_then(|v| v.parse::<bool>().ok()) {
            self.engine.parallel = v;
        }
        if let Some(v) = var("BLEND_LONG_TERM_RATIO").and_then(|v| v.parse::<f64>().ok()) {
            self.blend.long_term_ratio = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.survival;
        if !(0.0 < s.score_floor && s.score_floor < s.score_ceiling && s.score_ceiling < 1.0) {
            return Err(invalid(
                "survival.score_floor",
                "must satisfy 0 < score_floor < score_ceiling < 1",
            ));
        }
        if !(0.0..=1.0).contains(&s.stale_floor) {
            return Err(invalid("survival.stale_floor", "must be between 0.0 and 1.0"));
        }
        if s.moderate_move_pct <= 0.0 || s.moderate_move_pct >= s.large_move_pct {
            return Err(invalid(
                "survival.moderate_move_pct",
                "must be positive and below large_move_pct",
            ));
        }

        if self.decay.default_half_life_days == 0 {
            return Err(invalid("decay.default_half_life_days", "must be greater than 0"));
        }

        let d = &self.dislocation;
        let ordered = |a: f64, b: f64, c: f64| a >= b && b >= c;
        if !ordered(d.critical.z_score, d.high.z_score, d.moderate.z_score)
            || !ordered(d.critical.drawdown, d.high.drawdown, d.moderate.drawdown)
            || !ordered(
                d.critical.volume_ratio,
                d.high.volume_ratio,
                d.moderate.volume_ratio,
            )
        {
            return Err(invalid(
                "dislocation",
                "severity thresholds must be ordered critical >= high >= moderate",
            ));
        }

        if !(0.0..=1.0).contains(&self.inference.confidence_cap) {
            return Err(invalid("inference.confidence_cap", "must be between 0.0 and 1.0"));
        }

        if !(0.0..=1.0).contains(&self.blend.long_term_ratio) {
            return Err(invalid("blend.long_term_ratio", "must be between 0.0 and 1.0"));
        }
        if self.blend.medium_confidence_divergence > self.blend.low_confidence_divergence {
            return Err(invalid(
                "blend.medium_confidence_divergence",
                "must not exceed low_confidence_divergence",
            ));
        }

        if self.tracking.moderate_confidence_gap > self.tracking.high_confidence_gap {
            return Err(invalid(
                "tracking.moderate_confidence_gap",
                "must not exceed high_confidence_gap",
            ));
        }

        if self.storage.backend == StorageBackend::Sqlite && self.storage.db_path.is_empty() {
            return Err(invalid("storage.db_path", "required for the sqlite backend"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
