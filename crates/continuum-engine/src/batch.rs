use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use continuum_core::config::ContinuumConfig;
use continuum_core::errors::{ContinuumError, ContinuumErrorCode, ContinuumResult, MissingData};
use continuum_core::traits::{
    ICycleStore, IEntityStore, IHistoryLog, IMarketDataSource, INewsSource,
};
use continuum_storage::Stores;

use crate::cycle::{CycleInput, NarrativeEngine};
use crate::report::CycleReport;
use crate::{batch_span, storage_span};

/// What happened to one entity in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntityOutcome {
    Processed { report: Box<CycleReport> },
    /// Required input missing; nothing was changed.
    Skipped { reason: String },
    /// An external data source failed.
    SourceFailed { error: String },
    /// Computation or storage failed.
    Failed { code: &'static str, error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityResult {
    pub entity_id: String,
    pub outcome: EntityOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// One per distinct entity id, in request order.
    pub results: Vec<EntityResult>,
}

impl BatchReport {
    fn count(&self, pred: impl Fn(&EntityOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }

    pub fn processed(&self) -> usize {
        self.count(|o| matches!(o, EntityOutcome::Processed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, EntityOutcome::Skipped { .. }))
    }

    pub fn source_failures(&self) -> usize {
        self.count(|o| matches!(o, EntityOutcome::SourceFailed { .. }))
    }

    pub fn failures(&self) -> usize {
        self.count(|o| matches!(o, EntityOutcome::Failed { .. }))
    }

    pub fn outcome(&self, entity_id: &str) -> Option<&EntityOutcome> {
        self.results
            .iter()
            .find(|r| r.entity_id == entity_id)
            .map(|r| &r.outcome)
    }
}

/// Runs cycles for many entities, one failure never affecting another.
///
/// Entity ids are deduplicated per batch. Two concurrent batches touching
/// the same entity are the caller's problem.
pub struct BatchRunner {
    engine: NarrativeEngine,
    config: ContinuumConfig,
    entities: Arc<dyn IEntityStore>,
    history: Arc<dyn IHistoryLog>,
    cycles: Arc<dyn ICycleStore>,
    market: Arc<dyn IMarketDataSource>,
    news: Arc<dyn INewsSource>,
}

impl BatchRunner {
    pub fn new(
        config: ContinuumConfig,
        stores: Stores,
        market: Arc<dyn IMarketDataSource>,
        news: Arc<dyn INewsSource>,
    ) -> Self {
        Self {
            engine: NarrativeEngine::new(&config),
            config,
            entities: stores.entities,
            history: stores.history,
            cycles: stores.cycles,
            market,
            news,
        }
    }

    pub fn engine(&self) -> &NarrativeEngine {
        &self.engine
    }

    /// Run every entity the store knows about.
    pub fn run_all(&self, now: DateTime<Utc>) -> ContinuumResult<BatchReport> {
        let ids = self.entities.list_ids()?;
        Ok(self.run(&ids, now))
    }

    pub fn run(&self, entity_ids: &[String], now: DateTime<Utc>) -> BatchReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();

        let mut seen = HashSet::new();
        let ids: Vec<&String> = entity_ids.iter().filter(|id| seen.insert(*id)).collect();
        let _span = batch_span!(run_id, ids.len()).entered();

        let results: Vec<EntityResult> = if self.config.engine.parallel {
            ids.par_iter().map(|id| self.result_for(id, now)).collect()
        } else {
            ids.iter().map(|id| self.result_for(id, now)).collect()
        };

        let report = BatchReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            results,
        };
        info!(
            %run_id,
            processed = report.processed(),
            skipped = report.skipped(),
            source_failures = report.source_failures(),
            failures = report.failures(),
            "batch complete"
        );
        report
    }

    fn result_for(&self, entity_id: &str, now: DateTime<Utc>) -> EntityResult {
        let outcome = match self.process(entity_id, now) {
            Ok(outcome) => outcome,
            Err(e) => classify_error(&e),
        };
        if !matches!(outcome, EntityOutcome::Processed { .. }) {
            warn!(entity_id, outcome = ?outcome, "entity not processed");
        }
        EntityResult {
            entity_id: entity_id.to_string(),
            outcome,
        }
    }

    fn process(&self, entity_id: &str, now: DateTime<Utc>) -> ContinuumResult<EntityOutcome> {
        let Some(mut entity) = self.entities.get(entity_id)? else {
            return Ok(skipped(MissingData::Entity));
        };
        let Some(observation) = self.market.observation(entity_id)? else {
            return Ok(skipped(MissingData::PriceObservation));
        };
        let news = self.news.headlines(entity_id).unwrap_or_else(|e| {
            warn!(entity_id, error = %e, "news unavailable, continuing without");
            Vec::new()
        });
        let history = self.history.history(entity_id)?;
        let profile = self.config.profile_for(entity_id);

        let outcome = self.engine.run_cycle(
            &mut entity,
            &history,
            CycleInput {
                observation: &observation,
                profile: &profile,
                news: &news,
                now,
            },
        )?;

        {
            let _span = storage_span!("persist", entity_id).entered();
            self.cycles.commit_cycle(&entity, outcome.snapshot())?;
        }

        Ok(EntityOutcome::Processed {
            report: Box::new(outcome.report),
        })
    }
}

fn skipped(missing: MissingData) -> EntityOutcome {
    EntityOutcome::Skipped {
        reason: missing.to_string(),
    }
}

fn classify_error(error: &ContinuumError) -> EntityOutcome {
    match error {
        ContinuumError::Cycle(e) if e.is_skip() => EntityOutcome::Skipped {
            reason: e.to_string(),
        },
        ContinuumError::Source(e) => EntityOutcome::SourceFailed {
            error: e.to_string(),
        },
        other => EntityOutcome::Failed {
            code: other.error_code(),
            error: other.to_string(),
        },
    }
}
