//! Trims raw request payloads down to the window the engine reads.

use serde::{Deserialize, Serialize};

use crate::models::bar::Bar;
use crate::models::market::{Leg, MarketMeta, MultiTimeframeData};
use crate::signals::extractor::MIN_BARS;

/// Higher-timeframe bars needed for the trend check.
pub const HTF_BARS: usize = 2;

/// Reduced request: last three bars per series, last two higher-timeframe bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedInput {
    pub data: MultiTimeframeData,
    pub market_meta: MarketMeta,
}

fn tail(bars: &[Bar], n: usize) -> Vec<Bar> {
    bars[bars.len().saturating_sub(n)..].to_vec()
}

/// Keep only the most recent bars of every series and of the
/// higher-timeframe history.
pub fn compress(data: &MultiTimeframeData, meta: &MarketMeta) -> CompressedInput {
    let mut trimmed = MultiTimeframeData::new();
    for leg in Leg::ALL {
        *trimmed.leg_mut(leg) = data
            .leg(leg)
            .iter()
            .map(|(tf, bars)| (tf.clone(), tail(bars, MIN_BARS)))
            .collect();
    }

    CompressedInput {
        data: trimmed,
        market_meta: MarketMeta {
            vix: meta.vix,
            atr_14: meta.atr_14,
            atr_median: meta.atr_median,
            ce_vol_spike: meta.ce_vol_spike,
            higher_tf_bars: tail(&meta.higher_tf_bars, HTF_BARS),
        },
    }
}
