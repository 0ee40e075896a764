//! Per-timeframe alignment of the spot, call and put signals

use tracing::debug;

use crate::models::bar::Bar;
use crate::models::decision::{Action, Confidence, Decision, LegPatterns, TimeframeReport};
use crate::models::market::MarketMeta;
use crate::models::signal::{Direction, Signal};
use crate::signals::extractor::extract;
use crate::signals::regime::{regime_for, Thresholds};
use crate::signals::scoring::{position_size_pct, round_score, HIGH_CONVICTION_SCORE};

/// Bonus when spot agrees with the option leg on the same side.
const PAIR_BONUS: f64 = 1.5;
/// Bonus when spot is bullish and call volume is spiking.
const CE_VOL_BONUS: f64 = 0.5;
/// Weight applied to a spot signal without option confirmation.
const SPOT_ONLY_FACTOR: f64 = 0.5;
const CONFLICT_GAP: f64 = 1.0;
const CONFLICT_PENALTY: f64 = 0.5;
const HTF_BONUS: f64 = 0.5;

/// Direction of the higher-timeframe trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Whether this trend supports a spot signal in `direction`.
    pub fn supports(&self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Trend::Up, Direction::Bullish) | (Trend::Down, Direction::Bearish)
        )
    }
}

/// Alignment score with the reasons that contributed to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alignment {
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Trend from the last two higher-timeframe closes.
pub fn htf_trend(bars: &[Bar]) -> Option<Trend> {
    match bars {
        [.., prev, last] if last.close > prev.close => Some(Trend::Up),
        [.., prev, last] if last.close < prev.close => Some(Trend::Down),
        _ => None,
    }
}

/// Base alignment score with the opposite-option conflict penalty applied.
///
/// The pair bonuses form a chain: bullish spot+call, then bearish spot+put,
/// then a discounted spot-only score.
pub fn align_signals(spot: &Signal, ce: &Signal, pe: &Signal, ce_vol_spike: bool) -> Alignment {
    let mut reasons = Vec::new();

    let mut score = if spot.direction == Direction::Bullish && ce.direction == Direction::Bullish {
        let vol_bonus = if ce_vol_spike { CE_VOL_BONUS } else { 0.0 };
        reasons.push("Spot+CE bullish alignment".to_string());
        spot.score + ce.score + PAIR_BONUS + vol_bonus
    } else if spot.direction == Direction::Bearish && pe.direction == Direction::Bearish {
        reasons.push("Spot+PE bearish alignment".to_string());
        spot.score + pe.score + PAIR_BONUS
    } else if spot.direction.is_directional() {
        SPOT_ONLY_FACTOR * spot.score
    } else {
        0.0
    };

    if ce.direction == pe.direction
        && ce.direction.is_directional()
        && pe.score - ce.score >= CONFLICT_GAP
    {
        score -= CONFLICT_PENALTY;
        reasons.push("Strong opposite-option conflict".to_string());
    }

    Alignment {
        score: round_score(score),
        reasons,
    }
}

/// Turn an alignment score into an action for the given thresholds.
pub fn decide(score: f64, spot: &Signal, ce: &Signal, pe: &Signal, limits: Thresholds) -> Decision {
    let bullish_pair = spot.direction == Direction::Bullish && ce.direction == Direction::Bullish;
    let bearish_pair = spot.direction == Direction::Bearish && pe.direction == Direction::Bearish;

    let action = if score >= limits.bull && bullish_pair {
        Action::BuyCall
    } else if score >= limits.bear && bearish_pair {
        Action::BuyPut
    } else {
        return Decision::new(Action::NoTrade, Confidence::Insufficient, 0, score);
    };

    let confidence = if score >= HIGH_CONVICTION_SCORE {
        Confidence::High
    } else {
        Confidence::Medium
    };

    Decision::new(action, confidence, position_size_pct(score), score)
}

/// Evaluate one timeframe from its three bar series.
pub fn evaluate_timeframe(
    timeframe: &str,
    spot_bars: &[Bar],
    ce_bars: &[Bar],
    pe_bars: &[Bar],
    meta: &MarketMeta,
) -> TimeframeReport {
    let (regime, limits) = regime_for(meta);
    let spot = extract(spot_bars);
    let ce = extract(ce_bars);
    let pe = extract(pe_bars);

    let Alignment { mut score, mut reasons } = align_signals(&spot, &ce, &pe, meta.ce_vol_spike);

    match htf_trend(&meta.higher_tf_bars) {
        Some(trend) if trend.supports(spot.direction) => {
            score = round_score(score + HTF_BONUS);
            reasons.push(match trend {
                Trend::Up => "HTF up-trend support".to_string(),
                Trend::Down => "HTF down-trend support".to_string(),
            });
        }
        _ => {}
    }

    let decision = decide(score, &spot, &ce, &pe, limits);

    debug!(
        timeframe = timeframe,
        regime = %regime,
        action = %decision.action,
        score = decision.alignment_score,
        "timeframe evaluated"
    );

    TimeframeReport {
        timeframe: timeframe.to_string(),
        regime,
        decision,
        patterns: LegPatterns {
            spot: spot.patterns,
            ce: ce.patterns,
            pe: pe.patterns,
        },
        reasons,
    }
}
