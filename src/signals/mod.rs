//! Signal evaluation pipeline: extraction, regime, alignment, consensus.

pub mod alignment;
pub mod consensus;
pub mod engine;
pub mod extractor;
pub mod regime;
pub mod scoring;
pub mod weights;

pub use alignment::{align_signals, decide, evaluate_timeframe, htf_trend, Alignment, Trend};
pub use consensus::{evaluate, evaluate_detailed, select_consensus};
pub use engine::SignalEngine;
pub use extractor::{extract, net_direction, MIN_BARS};
pub use regime::{classify_regime, regime_for, thresholds, Thresholds};
pub use scoring::{position_frac, position_size_pct, round_score};
pub use weights::PatternWeights;
