use tracing::debug;

use continuum_core::config::DislocationConfig;
use continuum_core::models::{DislocationAssessment, PriceObservation};

use crate::{metrics, pattern, severity};

/// Stateless dislocation detector.
#[derive(Debug, Clone, Default)]
pub struct DislocationDetector {
    config: DislocationConfig,
}

impl DislocationDetector {
    pub fn new(config: DislocationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DislocationConfig {
        &self.config
    }

    /// Grade one observation.
    pub fn assess(&self, observation: &PriceObservation) -> DislocationAssessment {
        let metrics = metrics::compute(observation);
        let severity = severity::classify(&metrics, &self.config);
        let pattern = pattern::classify(&metrics, &self.config);

        debug!(
            z_score = metrics.z_score,
            return_pct = metrics.today_return_pct(),
            drawdown_pct = metrics.drawdown_pct(),
            volume_ratio = metrics.volume_ratio,
            %severity,
            %pattern,
            "dislocation assessed"
        );

        DislocationAssessment {
            severity,
            pattern,
            metrics,
        }
    }
}
