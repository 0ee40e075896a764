//! Runs every detector over the last three bars of a series

use std::cmp::Ordering;

use tracing::trace;

use crate::models::bar::Bar;
use crate::models::signal::{Direction, PatternTag, Signal};
use crate::patterns::{
    break_of_structure, engulfing, fair_value_gap, inside_break, liquidity_sweep, order_block,
    pin_bar,
};
use crate::signals::scoring::round_score;
use crate::signals::weights::PatternWeights;

/// Bars inspected per series.
pub const MIN_BARS: usize = 3;

/// Extract a [`Signal`] from the most recent three bars of `bars`.
///
/// Series shorter than three bars yield [`Signal::neutral`].
pub fn extract(bars: &[Bar]) -> Signal {
    let [b0, b1, b2] = match bars {
        [.., b0, b1, b2] => [b0, b1, b2],
        _ => return Signal::neutral(),
    };

    let block = order_block(b0, b1);
    let patterns: Vec<PatternTag> = pin_bar(b2, b1.volume)
        .into_iter()
        .chain(engulfing(b2, b1))
        .chain(inside_break(b2, b1))
        .chain(fair_value_gap(b2, b1))
        .chain(liquidity_sweep(b2, &block))
        .chain(break_of_structure(b2, b1))
        .collect();

    let score = round_score(patterns.iter().map(|tag| PatternWeights::get(*tag)).sum());
    let direction = net_direction(&patterns);

    trace!(?patterns, score, ?direction, "extracted signal");

    Signal::new(direction, score, patterns)
}

/// Net directional lean of a set of tags.
pub fn net_direction(patterns: &[PatternTag]) -> Direction {
    let tally: i32 = patterns
        .iter()
        .map(|tag| match tag.bias() {
            Direction::Bullish => 1,
            Direction::Bearish => -1,
            Direction::None => 0,
        })
        .sum();

    match tally.cmp(&0) {
        Ordering::Greater => Direction::Bullish,
        Ordering::Less => Direction::Bearish,
        Ordering::Equal => Direction::None,
    }
}
