use tracing::debug;

use continuum_core::config::BlendConfig;
use continuum_core::models::{
    BlendConfidence, BlendTable, DivergenceContradiction, Entity, NarrativeInference, Severity,
    WeightBlend,
};

#[derive(Debug, Clone, Default)]
pub struct WeightBlender {
    config: BlendConfig,
}

impl WeightBlender {
    pub fn new(config: BlendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BlendConfig {
        &self.config
    }

    /// Blend one pair of weights (integer percent).
    pub fn blend_pair(&self, long_term: u32, short_term: u32) -> u32 {
        let blended = f64::from(long_term) * self.config.long_term_ratio
            + f64::from(short_term) * self.config.short_term_ratio();
        blended.round().max(0.0) as u32
    }

    /// Confidence label for a divergence under the current severity.
    pub fn confidence(&self, divergence: u32, severity: Severity) -> BlendConfidence {
        if divergence > self.config.low_confidence_divergence {
            BlendConfidence::Low
        } else if divergence > self.config.medium_confidence_divergence
            || severity == Severity::Critical
        {
            BlendConfidence::Medium
        } else {
            BlendConfidence::High
        }
    }

    /// Build the blend table for every hypothesis, in slot order.
    ///
    /// Without an inference every short-term weight is the configured default.
    pub fn blend(
        &self,
        entity: &Entity,
        inference: Option<&NarrativeInference>,
        severity: Severity,
    ) -> BlendTable {
        let rows: Vec<WeightBlend> = entity
            .hypotheses
            .values()
            .map(|h| {
                let long_term = (h.survival_score * 100.0).round().max(0.0) as u32;
                let short_term = inference
                    .and_then(|inf| inf.signal_for(&h.id))
                    .unwrap_or(self.config.default_short_term);
                let divergence = long_term.abs_diff(short_term);
                WeightBlend {
                    hypothesis: h.id.clone(),
                    long_term,
                    short_term,
                    blended: self.blend_pair(long_term, short_term),
                    divergence,
                    confidence: self.confidence(divergence, severity),
                }
            })
            .collect();

        let contradiction = self.divergence_contradiction(&rows);
        if let Some(c) = &contradiction {
            debug!(
                entity_id = %entity.id,
                hypothesis = %c.hypothesis,
                long_term = c.long_term,
                short_term = c.short_term,
                "divergence contradiction"
            );
        }
        BlendTable {
            rows,
            contradiction,
        }
    }

    /// The row with the largest long-over-short gap among those research
    /// rates above the minimum and the market prices below the maximum.
    /// Ties keep slot order.
    pub fn divergence_contradiction(&self, rows: &[WeightBlend]) -> Option<DivergenceContradiction> {
        let mut best: Option<DivergenceContradiction> = None;
        for row in rows {
            if row.long_term <= self.config.contradiction_long_term_min
                || row.short_term >= self.config.contradiction_short_term_max
            {
                continue;
            }
            let gap = row.long_term - row.short_term;
            if best.as_ref().map_or(true, |b| gap > b.gap) {
                best = Some(DivergenceContradiction {
                    hypothesis: row.hypothesis.clone(),
                    long_term: row.long_term,
                    short_term: row.short_term,
                    gap,
                });
            }
        }
        best
    }
}
