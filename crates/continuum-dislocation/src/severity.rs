use continuum_core::config::{DislocationConfig, SeverityThresholds};
use continuum_core::models::{DislocationMetrics, Severity};

fn reaches(metrics: &DislocationMetrics, t: &SeverityThresholds) -> bool {
    metrics.z_score.abs() >= t.z_score
        || metrics.drawdown_from_peak >= t.drawdown
        || metrics.volume_ratio >= t.volume_ratio
}

/// Highest tier any single driver reaches.
pub fn classify(metrics: &DislocationMetrics, config: &DislocationConfig) -> Severity {
    if reaches(metrics, &config.critical) {
        Severity::Critical
    } else if reaches(metrics, &config.high) {
        Severity::High
    } else if reaches(metrics, &config.moderate) {
        Severity::Moderate
    } else {
        Severity::Normal
    }
}
