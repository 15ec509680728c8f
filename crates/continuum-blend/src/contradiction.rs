//! Two independent contradiction signals, reported side by side.
//!
//! The inference engine contradicts a hypothesis from instrument
//! characteristics or news; the blender from long/short divergence. Neither
//! is preferred; callers see both plus how they relate.

use serde::{Deserialize, Serialize};

use continuum_core::models::{BlendTable, DivergenceContradiction, HypothesisId, NarrativeInference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContradictionAgreement {
    /// Neither signal fired.
    None,
    /// Both fired on the same hypothesis.
    Agree,
    CharacteristicOnly,
    DivergenceOnly,
    /// Both fired on different hypotheses.
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionSignals {
    pub characteristic: Option<HypothesisId>,
    pub divergence: Option<DivergenceContradiction>,
    pub agreement: ContradictionAgreement,
}

impl ContradictionSignals {
    pub fn reconcile(inference: Option<&NarrativeInference>, table: &BlendTable) -> Self {
        let characteristic = inference.and_then(|i| i.contradicted.clone());
        let divergence = table.contradiction.clone();
        let agreement = match (&characteristic, &divergence) {
            (None, None) => ContradictionAgreement::None,
            (Some(_), None) => ContradictionAgreement::CharacteristicOnly,
            (None, Some(_)) => ContradictionAgreement::DivergenceOnly,
            (Some(c), Some(d)) if *c == d.hypothesis => ContradictionAgreement::Agree,
            (Some(_), Some(_)) => ContradictionAgreement::Conflict,
        };
        Self {
            characteristic,
            divergence,
            agreement,
        }
    }

    /// Every hypothesis either signal contradicts, deduplicated.
    pub fn hypotheses(&self) -> Vec<HypothesisId> {
        let mut ids: Vec<HypothesisId> = self
            .characteristic
            .iter()
            .cloned()
            .chain(self.divergence.iter().map(|d| d.hypothesis.clone()))
            .collect();
        ids.dedup();
        ids
    }

    pub fn any(&self) -> bool {
        self.agreement != ContradictionAgreement::None
    }
}
