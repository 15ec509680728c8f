use serde::{Deserialize, Serialize};

use super::HypothesisId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendConfidence {
    Low,
    Medium,
    High,
}

/// Long-term (research) and short-term (market-implied) weights for one hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBlend {
    pub hypothesis: HypothesisId,
    pub long_term: u32,
    pub short_term: u32,
    pub blended: u32,
    /// `|long_term - short_term|`.
    pub divergence: u32,
    pub confidence: BlendConfidence,
}

/// A bullish research weight the market is not pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergenceContradiction {
    pub hypothesis: HypothesisId,
    pub long_term: u32,
    pub short_term: u32,
    /// `long_term - short_term`.
    pub gap: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendTable {
    pub rows: Vec<WeightBlend>,
    pub contradiction: Option<DivergenceContradiction>,
}

impl BlendTable {
    pub fn row(&self, id: &HypothesisId) -> Option<&WeightBlend> {
        self.rows.iter().find(|r| &r.hypothesis == id)
    }
}
