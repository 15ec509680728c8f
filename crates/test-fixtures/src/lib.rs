//! Test fixture loader for Continuum entities, observations and configs.
//!
//! Fixtures live under `data/` in this crate and are shared by the
//! integration tests and benches of every other crate.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use continuum_core::models::{Entity, PriceObservation};
use continuum_core::ContinuumConfig;

/// Root directory of the fixture data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// `data/entities/<name>.json`.
pub fn entity(name: &str) -> Entity {
    load_fixture(&format!("entities/{name}.json"))
}

/// `data/observations/<name>.json`.
pub fn observation(name: &str) -> PriceObservation {
    load_fixture(&format!("observations/{name}.json"))
}

/// `data/config/<name>.toml`, parsed and validated.
///
/// # Panics
/// Panics if the file is missing or invalid.
pub fn config(name: &str) -> ContinuumConfig {
    let path = fixture_path(&format!("config/{name}.toml"));
    let config = ContinuumConfig::from_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load config {}: {}", path.display(), e));
    config
        .validate()
        .unwrap_or_else(|e| panic!("Invalid config {}: {}", path.display(), e));
    config
}
