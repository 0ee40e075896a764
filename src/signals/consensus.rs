//! Multi-timeframe consensus selection

use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::models::bar::Bar;
use crate::models::decision::{Action, Decision, Evaluation, TimeframeReport};
use crate::models::market::{Leg, MarketMeta, MultiTimeframeData};
use crate::signals::alignment::evaluate_timeframe;

/// Candidate actions in tie-break priority order.
const CANDIDATES: [Action; 2] = [Action::BuyCall, Action::BuyPut];

/// Resolve per-timeframe decisions into one final decision.
///
/// The first candidate action reached by at least `consensus_needed`
/// timeframes wins. Among the agreeing timeframes the one with the strictly
/// greatest alignment score is returned unchanged; earlier timeframes win ties.
pub fn select_consensus<'a>(
    decisions: impl IntoIterator<Item = &'a Decision>,
    consensus_needed: usize,
) -> Decision {
    let decisions: Vec<&Decision> = decisions.into_iter().collect();
    let Some(winner) = CANDIDATES.into_iter().find(|candidate| {
        decisions.iter().filter(|d| d.action == *candidate).count() >= consensus_needed
    }) else {
        return Decision::no_trade();
    };

    decisions
        .into_iter()
        .filter(|d| d.action == winner)
        .fold(None::<&Decision>, |best, d| match best {
            Some(b) if d.alignment_score <= b.alignment_score => Some(b),
            _ => Some(d),
        })
        .cloned()
        .unwrap_or_else(Decision::no_trade)
}

fn lookup<'a>(
    data: &'a MultiTimeframeData,
    leg: Leg,
    timeframe: &str,
) -> Result<&'a [Bar]> {
    data.series(leg, timeframe).ok_or_else(|| {
        warn!(leg = %leg, timeframe = timeframe, "bar series missing from request");
        EngineError::MissingSeries {
            leg,
            timeframe: timeframe.to_string(),
        }
    })
}

/// Evaluate every configured timeframe and return the consensus together
/// with the per-timeframe reports.
pub fn evaluate_detailed(
    data: &MultiTimeframeData,
    meta: &MarketMeta,
    config: &EngineConfig,
) -> Result<Evaluation> {
    config.validate()?;

    let timeframes = config
        .evaluated_timeframes
        .iter()
        .map(|tf| -> Result<TimeframeReport> {
            Ok(evaluate_timeframe(
                tf,
                lookup(data, Leg::Spot, tf)?,
                lookup(data, Leg::Ce, tf)?,
                lookup(data, Leg::Pe, tf)?,
                meta,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let decision = select_consensus(
        timeframes.iter().map(|report| &report.decision),
        config.consensus_needed,
    );

    info!(
        action = %decision.action,
        confidence = ?decision.confidence,
        position_size_pct = decision.position_size_pct,
        alignment_score = decision.alignment_score,
        timeframes = timeframes.len(),
        "consensus decision"
    );

    Ok(Evaluation {
        decision,
        timeframes,
    })
}

/// Evaluate every configured timeframe and return only the final decision.
pub fn evaluate(
    data: &MultiTimeframeData,
    meta: &MarketMeta,
    config: &EngineConfig,
) -> Result<Decision> {
    evaluate_detailed(data, meta, config).map(|evaluation| evaluation.decision)
}
