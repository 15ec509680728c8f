use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::HypothesisId;

/// Role a hypothesis slot plays in narrative inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeRole {
    Growth,
    Competition,
    Valuation,
    Moat,
}

/// Maps each inference role to the entity's hypothesis slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeRoles {
    pub growth: HypothesisId,
    pub moat: HypothesisId,
    pub competition: HypothesisId,
    pub valuation: HypothesisId,
}

impl Default for NarrativeRoles {
    fn default() -> Self {
        Self {
            growth: HypothesisId::from("T1"),
            moat: HypothesisId::from("T2"),
            competition: HypothesisId::from("T3"),
            valuation: HypothesisId::from("T4"),
        }
    }
}

impl NarrativeRoles {
    pub fn slot(&self, role: NarrativeRole) -> &HypothesisId {
        match role {
            NarrativeRole::Growth => &self.growth,
            NarrativeRole::Moat => &self.moat,
            NarrativeRole::Competition => &self.competition,
            NarrativeRole::Valuation => &self.valuation,
        }
    }
}

/// Instrument characteristics supplied by configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentProfile {
    pub high_multiple: bool,
    pub growth_stock: bool,
    pub disruptive_tech_exposure: bool,
    /// Base short-horizon weight per hypothesis, integer percent.
    pub base_weights: BTreeMap<HypothesisId, u32>,
    pub roles: NarrativeRoles,
}

impl InstrumentProfile {
    pub fn base_weight(&self, id: &HypothesisId) -> Option<u32> {
        self.base_weights.get(id).copied()
    }
}
