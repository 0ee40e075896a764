//! Stateless chart-pattern detectors over the last two or three bars.

pub mod candle;
pub mod structure;

pub use candle::{engulfing, inside_break, pin_bar};
pub use structure::{break_of_structure, fair_value_gap, liquidity_sweep, order_block, OrderBlock};
