use continuum_core::models::{Direction, Entity, SkewClassification};

/// `round(100 × (Σ upside − Σ downside))` over current scores.
pub fn skew(entity: &Entity) -> i32 {
    let net: f64 = entity
        .hypotheses
        .values()
        .map(|h| match h.direction {
            Direction::Upside => h.survival_score,
            Direction::Downside => -h.survival_score,
            Direction::Neutral => 0.0,
        })
        .sum();
    (net * 100.0).round() as i32
}

/// Balanced inside `±band` inclusive.
pub fn classify(skew: i32, band: i32) -> SkewClassification {
    if skew > band {
        SkewClassification::Upside
    } else if skew < -band {
        SkewClassification::Downside
    } else {
        SkewClassification::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_band_edges() {
        assert_eq!(classify(10, 10), SkewClassification::Balanced);
        assert_eq!(classify(11, 10), SkewClassification::Upside);
        assert_eq!(classify(-10, 10), SkewClassification::Balanced);
        assert_eq!(classify(-11, 10), SkewClassification::Downside);
    }
}
