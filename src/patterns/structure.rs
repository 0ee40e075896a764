//! Market-structure detectors: fair value gap, order block, liquidity
//! sweep and break of structure

use crate::models::bar::Bar;
use crate::models::signal::PatternTag;

const FVG_RANGE_FACTOR: f64 = 1.25;
const FVG_VOLUME_FACTOR: f64 = 1.3;

/// Price zone spanned by the two bars preceding the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderBlock {
    pub low: f64,
    pub high: f64,
}

/// Detect a range and volume expansion from `previous` into `current`.
pub fn fair_value_gap(current: &Bar, previous: &Bar) -> Option<PatternTag> {
    if current.range() > FVG_RANGE_FACTOR * previous.range()
        && current.volume > FVG_VOLUME_FACTOR * previous.volume
    {
        Some(PatternTag::Fvg)
    } else {
        None
    }
}

/// Order block bounds from the two bars before the current one.
pub fn order_block(oldest: &Bar, previous: &Bar) -> OrderBlock {
    OrderBlock {
        low: oldest.low.min(previous.low),
        high: oldest.high.max(previous.high),
    }
}

/// Detect wicks through the order block that close back inside it.
///
/// Both sides are checked independently, bullish first, so a bar can
/// sweep both ends of a narrow block.
pub fn liquidity_sweep(current: &Bar, block: &OrderBlock) -> impl Iterator<Item = PatternTag> {
    let bull = (current.low < block.low && block.low < current.close).then_some(PatternTag::LiqBull);
    let bear =
        (current.high > block.high && block.high > current.close).then_some(PatternTag::LiqBear);
    [bull, bear].into_iter().flatten()
}

/// Detect a close beyond the previous bar's high (`bos_up`) or low (`bos_down`).
pub fn break_of_structure(current: &Bar, previous: &Bar) -> Option<PatternTag> {
    if current.close > previous.high {
        Some(PatternTag::BosUp)
    } else if current.close < previous.low {
        Some(PatternTag::BosDown)
    } else {
        None
    }
}
