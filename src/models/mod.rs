//! Shared data models spanning the engine layers.

pub mod bar;
pub mod decision;
pub mod market;
pub mod signal;

pub use bar::{Bar, BarSeries};
pub use decision::{Action, Confidence, Decision, Evaluation, LegPatterns, TimeframeReport};
pub use market::{Leg, MarketMeta, MultiTimeframeData, Regime};
pub use signal::{Direction, PatternTag, Signal};
