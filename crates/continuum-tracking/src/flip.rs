use chrono::NaiveDate;
use tracing::info;

use continuum_core::config::TrackingConfig;
use continuum_core::errors::{ContinuumResult, CycleError, MissingData};
use continuum_core::models::{DislocationAssessment, Entity, FlipRecord, NarrativeInference};

use crate::dominance::{DominanceAssessment, DominanceTracker};

#[derive(Debug, Clone, PartialEq)]
pub struct TrackOutcome {
    pub dominance: DominanceAssessment,
    /// Set when the dominant hypothesis changed this cycle.
    pub flip: Option<FlipRecord>,
}

/// Updates an entity's dominant hypothesis and flip history.
#[derive(Debug, Clone, Default)]
pub struct FlipTracker {
    dominance: DominanceTracker,
}

impl FlipTracker {
    pub fn new(config: TrackingConfig) -> Self {
        Self {
            dominance: DominanceTracker::new(config),
        }
    }

    /// Recompute dominance from the entity's current scores.
    ///
    /// A flip needs a previously stored dominant; the first assignment is
    /// not a flip. On a flip the previous `last_flip` moves into
    /// `narrative_history`.
    pub fn track(
        &self,
        entity: &mut Entity,
        date: NaiveDate,
        price: f64,
        trigger: &str,
    ) -> ContinuumResult<TrackOutcome> {
        let scores = entity.scores();
        let dominance = self
            .dominance
            .assess(&scores)
            .ok_or_else(|| CycleError::missing(&entity.id, MissingData::Hypotheses))?;

        let flip = match &entity.dominant {
            Some(previous) if *previous != dominance.dominant => Some(FlipRecord {
                date,
                from: previous.clone(),
                to: dominance.dominant.clone(),
                trigger: trigger.to_string(),
                price,
                from_score: scores.get(previous).copied().unwrap_or(0.0),
                to_score: dominance.score,
            }),
            _ => None,
        };

        if let Some(record) = &flip {
            info!(
                entity_id = %entity.id,
                from = %record.from,
                to = %record.to,
                price,
                "dominant narrative flipped"
            );
            if let Some(old) = entity.last_flip.take() {
                entity.narrative_history.push(old);
            }
            entity.last_flip = Some(record.clone());
        }

        entity.dominant = Some(dominance.dominant.clone());
        entity.confidence = dominance.confidence;

        Ok(TrackOutcome { dominance, flip })
    }
}

/// Human-readable cause of a flip.
pub fn trigger_text(
    dislocation: Option<&DislocationAssessment>,
    inference: Option<&NarrativeInference>,
) -> String {
    let mut parts = Vec::new();
    if let Some(d) = dislocation {
        parts.push(format!(
            "{} ({}) on {:+.1}% day",
            d.pattern,
            d.severity,
            d.metrics.today_return_pct()
        ));
    }
    if let Some(i) = inference {
        parts.push(format!("market pricing {}", i.primary));
    }
    if parts.is_empty() {
        "survival rescoring".to_string()
    } else {
        parts.join("; ")
    }
}
