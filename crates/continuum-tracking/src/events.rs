use std::collections::BTreeMap;

use continuum_core::config::TrackingConfig;
use continuum_core::models::{
    DislocationAssessment, HistorySnapshot, HypothesisId, NarrativeEvent, Severity,
};

// Absorbs float noise in 2dp score differences.
const SHIFT_TOLERANCE: f64 = 1e-9;

/// Discrete events for one snapshot, in a fixed order: flip, severity,
/// contradictions, then score shifts in slot order.
pub fn detect(
    previous: Option<&HistorySnapshot>,
    dominant: &HypothesisId,
    scores: &BTreeMap<HypothesisId, f64>,
    dislocation: Option<&DislocationAssessment>,
    contradicted: &[HypothesisId],
    config: &TrackingConfig,
) -> Vec<NarrativeEvent> {
    let mut events = Vec::new();

    if let Some(prev) = previous {
        if prev.dominant != *dominant {
            events.push(NarrativeEvent::Flip {
                from: prev.dominant.clone(),
                to: dominant.clone(),
            });
        }
    }

    if let Some(d) = dislocation {
        if d.severity >= Severity::High {
            events.push(NarrativeEvent::SeverityEscalation {
                severity: d.severity,
            });
        }
    }

    for id in contradicted {
        events.push(NarrativeEvent::Contradiction {
            hypothesis: id.clone(),
        });
    }

    if let Some(prev) = previous {
        for (id, score) in scores {
            let Some(before) = prev.scores.get(id) else {
                continue;
            };
            let delta = score - before;
            if delta.abs() + SHIFT_TOLERANCE >= config.score_shift_event {
                events.push(NarrativeEvent::LargeScoreShift {
                    hypothesis: id.clone(),
                    delta,
                });
            }
        }
    }

    events
}
