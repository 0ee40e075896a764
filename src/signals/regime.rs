//! Volatility regime classification and dynamic action thresholds

use serde::{Deserialize, Serialize};

use crate::models::market::{MarketMeta, Regime};
use crate::signals::scoring::round_score;

const HIGH_VIX: f64 = 18.0;
const LOW_VIX: f64 = 13.0;
const HIGH_ATR_RATIO: f64 = 1.5;
const LOW_ATR_RATIO: f64 = 0.9;

/// Below this VIX the bullish threshold is relaxed.
const CALM_VIX: f64 = 11.0;
const CALM_BULL_RELIEF: f64 = 0.3;
const BULL_FLOOR: f64 = 1.2;

/// Minimum alignment scores required to act.
///
/// The bearish threshold is never below the bullish one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub bull: f64,
    pub bear: f64,
}

pub fn classify_regime(vix: f64, atr: f64, atr_median: f64) -> Regime {
    if vix > HIGH_VIX || atr > HIGH_ATR_RATIO * atr_median {
        Regime::HighVolatility
    } else if vix < LOW_VIX || atr < LOW_ATR_RATIO * atr_median {
        Regime::LowVolatility
    } else {
        Regime::NormalMarket
    }
}

pub fn thresholds(regime: Regime, vix: f64) -> Thresholds {
    let (mut bull, bear) = match regime {
        Regime::HighVolatility => (2.3, 3.0),
        Regime::LowVolatility => (1.7, 2.5),
        Regime::NormalMarket => (1.5, 2.5),
    };
    if vix < CALM_VIX {
        bull = BULL_FLOOR.max(round_score(bull - CALM_BULL_RELIEF));
    }
    Thresholds { bull, bear }
}

/// Classify `meta` and look up its thresholds in one step.
pub fn regime_for(meta: &MarketMeta) -> (Regime, Thresholds) {
    let regime = classify_regime(meta.vix, meta.atr_14, meta.atr_median);
    (regime, thresholds(regime, meta.vix))
}
