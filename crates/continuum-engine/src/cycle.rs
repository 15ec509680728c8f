use chrono::{DateTime, Utc};
use tracing::{info, warn};

use continuum_blend::{ContradictionSignals, WeightBlender};
use continuum_core::config::ContinuumConfig;
use continuum_core::errors::{ContinuumResult, CycleError, MissingData};
use continuum_core::models::{
    AlertState, Entity, HistorySnapshot, InstrumentProfile, PriceAppend, PriceObservation,
};
use continuum_dislocation::DislocationDetector;
use continuum_inference::InferenceEngine;
use continuum_survival::SurvivalEngine;
use continuum_tracking::flip::trigger_text;
use continuum_tracking::{FlipTracker, HistoryLogger, HistoryRecord, SnapshotInput};

use crate::cycle_span;
use crate::report::{CycleReport, ScoreChange};

/// Inputs for one entity's cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleInput<'a> {
    pub observation: &'a PriceObservation,
    pub profile: &'a InstrumentProfile,
    pub news: &'a [String],
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    pub report: CycleReport,
    pub record: HistoryRecord,
}

impl CycleOutcome {
    pub fn snapshot(&self) -> &HistorySnapshot {
        &self.record.snapshot
    }
}

/// All scoring components, configured once.
#[derive(Debug, Clone, Default)]
pub struct NarrativeEngine {
    survival: SurvivalEngine,
    detector: DislocationDetector,
    inference: InferenceEngine,
    blender: WeightBlender,
    flips: FlipTracker,
    logger: HistoryLogger,
}

impl NarrativeEngine {
    pub fn new(config: &ContinuumConfig) -> Self {
        Self {
            survival: SurvivalEngine::new(config.survival.clone(), config.decay.clone()),
            detector: DislocationDetector::new(config.dislocation.clone()),
            inference: InferenceEngine::new(config.inference.clone()),
            blender: WeightBlender::new(config.blend.clone()),
            flips: FlipTracker::new(config.tracking.clone()),
            logger: HistoryLogger::new(config.tracking.clone()),
        }
    }

    /// Run one scoring cycle for `entity`.
    ///
    /// `history` is the entity's logged snapshots, date-ascending. The
    /// entity is only updated when the whole cycle succeeds. The returned
    /// snapshot is not written anywhere.
    pub fn run_cycle(
        &self,
        entity: &mut Entity,
        history: &[HistorySnapshot],
        input: CycleInput<'_>,
    ) -> ContinuumResult<CycleOutcome> {
        let observation = input.observation;
        let date = observation.date;
        let _span = cycle_span!(entity.id, date).entered();

        if entity.hypotheses.is_empty() {
            return Err(CycleError::missing(&entity.id, MissingData::Hypotheses).into());
        }

        let mut working = entity.clone();
        let price_replaced = match working.append_price(observation.point()) {
            PriceAppend::Appended => false,
            PriceAppend::Replaced => true,
            PriceAppend::Rejected => {
                return Err(CycleError::InvalidState {
                    entity_id: entity.id.clone(),
                    reason: format!("observation for {date} is older than the price history"),
                }
                .into())
            }
        };

        let update = self
            .survival
            .recalculate_and_apply(&mut working, Some(observation.current), input.now)?;

        let dislocation = self.detector.assess(observation);
        working.alert_state = AlertState::from(dislocation.severity);

        let inference = self
            .inference
            .infer(&working, &dislocation, input.profile, input.news)?;
        let blend = self
            .blender
            .blend(&working, Some(&inference), dislocation.severity);
        let contradictions = ContradictionSignals::reconcile(Some(&inference), &blend);

        let trigger = trigger_text(Some(&dislocation), Some(&inference));
        let tracked = self
            .flips
            .track(&mut working, date, observation.current, &trigger)?;

        let contradicted = contradictions.hypotheses();
        let previous = HistoryLogger::previous_before(history, date);
        let record = self.logger.build(
            &working,
            SnapshotInput {
                date,
                price: observation.current,
                dislocation: Some(&dislocation),
                contradicted: &contradicted,
                live_flip: tracked.flip.as_ref(),
            },
            previous,
        )?;
        if record.disagreement.is_some() {
            warn!(entity_id = %working.id, %date, "flip disagreement recorded");
        }

        *entity = working;

        let report = CycleReport {
            entity_id: entity.id.clone(),
            date,
            price: observation.current,
            price_replaced,
            price_move_pct: update.price_move_pct,
            survival_changes: ScoreChange::from_update(&update),
            dislocation,
            inference,
            blend,
            contradictions,
            dominant: tracked.dominance.dominant,
            dominance_confidence: tracked.dominance.confidence,
            flip: tracked.flip,
            flip_disagreement: record.disagreement.is_some(),
        };

        info!(
            entity_id = %report.entity_id,
            %date,
            severity = %report.dislocation.severity,
            pattern = %report.dislocation.pattern,
            dominant = %report.dominant,
            changed = report.survival_changes.len(),
            flipped = report.flip.is_some(),
            "cycle complete"
        );

        Ok(CycleOutcome { report, record })
    }
}
