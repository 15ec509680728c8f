use continuum_core::config::DislocationConfig;
use continuum_core::models::{DislocationMetrics, Pattern};

/// Shape of the move. Rules are checked in order; the first match wins.
///
/// Capitulation is a strict subset of the gap-down condition (deeper fall,
/// heavier volume), so it is tested first or it could never match.
pub fn classify(m: &DislocationMetrics, config: &DislocationConfig) -> Pattern {
    if m.today_return < config.capitulation_return && m.volume_ratio > config.capitulation_volume {
        Pattern::Capitulation
    } else if m.today_return < config.gap_down_return && m.volume_ratio > config.gap_down_volume {
        Pattern::GapDown
    } else if m.consecutive_down_days >= config.distribution_down_days
        && m.range_position < config.distribution_range_position
    {
        Pattern::Distribution
    } else if m.consecutive_down_days >= config.steady_decline_days {
        Pattern::SteadyDecline
    } else if m.today_return.abs() < config.noise_return && m.volume_ratio > config.noise_volume {
        Pattern::VolumeNoise
    } else {
        Pattern::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(ret: f64, volume: f64, down_days: u32, range: f64) -> DislocationMetrics {
        DislocationMetrics {
            z_score: 0.0,
            today_return: ret,
            drawdown_from_peak: 0.0,
            volume_ratio: volume,
            range_position: range,
            consecutive_down_days: down_days,
        }
    }

    #[test]
    fn test_capitulation_before_gap_down() {
        let c = DislocationConfig::default();
        assert_eq!(classify(&metrics(-0.10, 4.0, 0, 0.5), &c), Pattern::Capitulation);
        assert_eq!(classify(&metrics(-0.10, 2.5, 0, 0.5), &c), Pattern::GapDown);
        assert_eq!(classify(&metrics(-0.06, 4.0, 0, 0.5), &c), Pattern::GapDown);
    }

    #[test]
    fn test_gap_down_before_distribution() {
        let c = DislocationConfig::default();
        assert_eq!(classify(&metrics(-0.06, 2.5, 6, 0.1), &c), Pattern::GapDown);
    }

    #[test]
    fn test_distribution_before_steady_decline() {
        let c = DislocationConfig::default();
        assert_eq!(classify(&metrics(-0.01, 1.0, 6, 0.2), &c), Pattern::Distribution);
        assert_eq!(classify(&metrics(-0.01, 1.0, 6, 0.5), &c), Pattern::SteadyDecline);
        assert_eq!(classify(&metrics(-0.01, 1.0, 3, 0.5), &c), Pattern::SteadyDecline);
    }

    #[test]
    fn test_noise_and_normal() {
        let c = DislocationConfig::default();
        assert_eq!(classify(&metrics(0.01, 1.8, 0, 0.5), &c), Pattern::VolumeNoise);
        assert_eq!(classify(&metrics(0.01, 1.2, 0, 0.5), &c), Pattern::Normal);
        assert_eq!(classify(&metrics(-0.03, 1.8, 0, 0.5), &c), Pattern::Normal);
    }
}
