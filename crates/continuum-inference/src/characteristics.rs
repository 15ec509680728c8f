//! Instrument-characteristic rules layered on top of the base table.

use continuum_core::config::InferenceConfig;
use continuum_core::models::{DislocationMetrics, HypothesisId, InstrumentProfile};

use crate::scoreboard::Scoreboard;

/// Apply the profile rules. Returns the moat slot when a disruption rule
/// contradicts it.
pub fn apply(
    board: &mut Scoreboard,
    metrics: &DislocationMetrics,
    profile: &InstrumentProfile,
    config: &InferenceConfig,
) -> Option<HypothesisId> {
    let roles = &profile.roles;
    let drawdown = metrics.drawdown_from_peak;
    let ret = metrics.today_return;
    let mut contradicted = None;

    if profile.high_multiple && drawdown > config.multiple_drawdown {
        board.add(
            &roles.valuation,
            config.multiple_points,
            format!("high multiple with {:.1}% drawdown", metrics.drawdown_pct()),
        );
        if drawdown > config.deep_multiple_drawdown {
            board.add(
                &roles.valuation,
                config.deep_multiple_points,
                "multiple compression beyond deep drawdown",
            );
        }
    }

    if profile.disruptive_tech_exposure {
        if ret < config.disruption_return {
            board.add(
                &roles.competition,
                config.disruption_points,
                format!(
                    "disruptive exposure on a {:.1}% day",
                    metrics.today_return_pct()
                ),
            );
            contradicted = contradict_moat(board, profile, config);
            if ret < config.severe_disruption_return || drawdown > config.severe_disruption_drawdown {
                board.add(
                    &roles.competition,
                    config.severe_disruption_points,
                    "severe disruption signal",
                );
            }
        } else if drawdown > config.disruption_drawdown {
            board.add(
                &roles.competition,
                config.disruption_drawdown_points,
                format!(
                    "disruptive exposure with {:.1}% drawdown",
                    metrics.drawdown_pct()
                ),
            );
            contradicted = contradict_moat(board, profile, config);
        }
    }

    if profile.growth_stock && metrics.consecutive_down_days > config.growth_down_days {
        board.add(
            &roles.growth,
            config.growth_points,
            format!(
                "growth stock down {} consecutive days",
                metrics.consecutive_down_days
            ),
        );
    }

    if drawdown > config.collapse_drawdown {
        board.add(&roles.valuation, config.collapse_points, "drawdown beyond half of peak");
    }

    contradicted
}

/// Only a genuinely bullish moat thesis (base weight at or above the
/// threshold) can be contradicted.
pub(crate) fn contradict_moat(
    board: &mut Scoreboard,
    profile: &InstrumentProfile,
    config: &InferenceConfig,
) -> Option<HypothesisId> {
    let moat = &profile.roles.moat;
    let base = profile.base_weight(moat).unwrap_or(0);
    if base >= config.bullish_base_weight {
        board.note(format!("{moat} contradicted: base weight {base}"));
        Some(moat.clone())
    } else {
        None
    }
}
