use continuum_core::migration::infer_sensitivity;
use continuum_core::models::{HypothesisStatus, Sensitivity};
use continuum_core::ContinuumConfig;
use proptest::prelude::*;

proptest! {
    #[test]
    fn status_never_drops_as_score_rises(a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(HypothesisStatus::from_score(lo) <= HypothesisStatus::from_score(hi));
    }

    #[test]
    fn upside_keywords_always_win(prefix in "[a-z ]{0,12}", suffix in "[a-z ]{0,12}") {
        let label = format!("{prefix} margin erosion {suffix} growth");
        prop_assert_eq!(infer_sensitivity(&label), Sensitivity::Upside);
    }

    #[test]
    fn blend_ratio_survives_toml(ratio in 0.0f64..=1.0, parallel: bool) {
        let mut config = ContinuumConfig::default();
        config.blend.long_term_ratio = ratio;
        config.engine.parallel = parallel;
        let parsed = ContinuumConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        prop_assert_eq!(parsed.blend.long_term_ratio, ratio);
        prop_assert_eq!(parsed.engine.parallel, parallel);
        prop_assert!(parsed.validate().is_ok());
    }
}
