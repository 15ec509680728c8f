use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use continuum_core::config::TrackingConfig;
use continuum_core::errors::{ContinuumResult, CycleError, MissingData};
use continuum_core::models::{
    DislocationAssessment, Entity, FlipRecord, HistorySnapshot, HypothesisId,
};

use crate::dominance::{self, DominanceTracker};
use crate::{events, skew};

/// Per-cycle inputs the entity itself does not carry.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotInput<'a> {
    pub date: NaiveDate,
    pub price: f64,
    pub dislocation: Option<&'a DislocationAssessment>,
    /// Hypotheses contradicted this cycle, by any signal.
    pub contradicted: &'a [HypothesisId],
    /// Flip recorded on the entity this cycle, if any.
    pub live_flip: Option<&'a FlipRecord>,
}

/// The live tracker and the history log disagree about whether a flip
/// happened. Expected on same-day reruns after a flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipDisagreement {
    pub live: bool,
    pub logged: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub snapshot: HistorySnapshot,
    pub disagreement: Option<FlipDisagreement>,
}

#[derive(Serialize)]
struct HashInput<'a> {
    entity_id: &'a str,
    date: NaiveDate,
    price: f64,
    scores: &'a BTreeMap<HypothesisId, f64>,
    dislocation: Option<&'a DislocationAssessment>,
    contradicted: &'a [HypothesisId],
}

/// Builds daily history snapshots.
#[derive(Debug, Clone, Default)]
pub struct HistoryLogger {
    config: TrackingConfig,
    dominance: DominanceTracker,
}

impl HistoryLogger {
    pub fn new(config: TrackingConfig) -> Self {
        Self {
            dominance: DominanceTracker::new(config.clone()),
            config,
        }
    }

    /// Latest snapshot strictly before `date`. `history` is date-ascending.
    pub fn previous_before(history: &[HistorySnapshot], date: NaiveDate) -> Option<&HistorySnapshot> {
        history.iter().rev().find(|s| s.date < date)
    }

    /// Build the snapshot for `entity` after this cycle's scoring.
    ///
    /// `previous` must be the snapshot from an earlier date (see
    /// [`previous_before`](Self::previous_before)); the flip flag compares
    /// against it, never against a same-day snapshot.
    pub fn build(
        &self,
        entity: &Entity,
        input: SnapshotInput<'_>,
        previous: Option<&HistorySnapshot>,
    ) -> ContinuumResult<HistoryRecord> {
        let scores = entity.scores();
        let dominance = self
            .dominance
            .assess(&scores)
            .ok_or_else(|| CycleError::missing(&entity.id, MissingData::Hypotheses))?;
        let previous = previous.filter(|p| p.date < input.date);

        let flip = previous.is_some_and(|p| p.dominant != dominance.dominant);
        let skew = skew::skew(entity);
        let events = events::detect(
            previous,
            &dominance.dominant,
            &scores,
            input.dislocation,
            input.contradicted,
            &self.config,
        );

        let hash_input = HashInput {
            entity_id: &entity.id,
            date: input.date,
            price: input.price,
            scores: &scores,
            dislocation: input.dislocation,
            contradicted: input.contradicted,
        };
        let bytes = serde_json::to_vec(&hash_input)?;
        let input_hash = blake3::hash(&bytes).to_hex().to_string();

        let live = input.live_flip.is_some();
        let disagreement = (live != flip).then(|| {
            warn!(
                entity_id = %entity.id,
                date = %input.date,
                live,
                logged = flip,
                "live flip and history flip disagree"
            );
            FlipDisagreement { live, logged: flip }
        });

        let snapshot = HistorySnapshot {
            date: input.date,
            price: input.price,
            ranking: dominance::ranking(&scores),
            scores,
            skew,
            classification: skew::classify(skew, self.config.skew_band),
            dominant: dominance.dominant,
            flip,
            dislocation: input.dislocation.copied(),
            events,
            input_hash,
        };

        Ok(HistoryRecord {
            snapshot,
            disagreement,
        })
    }
}
