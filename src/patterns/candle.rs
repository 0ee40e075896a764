//! Candlestick shape detectors: pin bar, engulfing, inside-bar breakout

use crate::models::bar::Bar;
use crate::models::signal::PatternTag;

/// Volume must exceed the previous bar's by this factor for a pin bar to count.
const PIN_VOLUME_FACTOR: f64 = 1.1;
const PIN_WICK_TO_BODY: f64 = 2.0;
const PIN_OPPOSITE_WICK_MAX: f64 = 0.3;
const INSIDE_BODY_FRACTION: f64 = 0.6;

/// Detect a hammer or shooting star on `bar`.
///
/// The long wick must be more than twice the body while the opposite wick
/// stays under 30% of the range, and volume must expand by more than 10%
/// over `prev_volume`. A zero-range bar never matches.
pub fn pin_bar(bar: &Bar, prev_volume: f64) -> Option<PatternTag> {
    let range = bar.range();
    let body = bar.body();
    let upper = bar.upper_wick();
    let lower = bar.lower_wick();

    if range == 0.0 || bar.volume <= PIN_VOLUME_FACTOR * prev_volume {
        return None;
    }

    if lower > PIN_WICK_TO_BODY * body && upper < PIN_OPPOSITE_WICK_MAX * range {
        Some(PatternTag::Hammer)
    } else if upper > PIN_WICK_TO_BODY * body && lower < PIN_OPPOSITE_WICK_MAX * range {
        Some(PatternTag::ShootingStar)
    } else {
        None
    }
}

/// Detect a body that engulfs the previous bar's open/close.
pub fn engulfing(current: &Bar, previous: &Bar) -> Option<PatternTag> {
    if current.is_bullish() && current.open < previous.close && current.close > previous.open {
        Some(PatternTag::BullEngulf)
    } else if current.is_bearish()
        && current.open > previous.close
        && current.close < previous.open
    {
        Some(PatternTag::BearEngulf)
    } else {
        None
    }
}

/// Detect an inside bar whose body fills more than 60% of its own range.
pub fn inside_break(current: &Bar, previous: &Bar) -> Option<PatternTag> {
    let contained = current.high <= previous.high && current.low >= previous.low;
    if contained && current.body() > INSIDE_BODY_FRACTION * current.range() {
        Some(PatternTag::InsideBreak)
    } else {
        None
    }
}
