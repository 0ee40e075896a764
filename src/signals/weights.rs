//! Score contributed by each detected pattern

use crate::models::signal::PatternTag;

pub struct PatternWeights;

impl PatternWeights {
    pub const PIN_BAR: f64 = 1.2;
    pub const ENGULFING: f64 = 1.2;
    pub const INSIDE_BREAK: f64 = 1.0;
    pub const FVG: f64 = 0.9;
    pub const LIQUIDITY_SWEEP: f64 = 1.0;
    pub const BREAK_OF_STRUCTURE: f64 = 1.0;

    /// Get weight for a tag
    pub fn get(tag: PatternTag) -> f64 {
        match tag {
            PatternTag::Hammer | PatternTag::ShootingStar => Self::PIN_BAR,
            PatternTag::BullEngulf | PatternTag::BearEngulf => Self::ENGULFING,
            PatternTag::InsideBreak => Self::INSIDE_BREAK,
            PatternTag::Fvg => Self::FVG,
            PatternTag::LiqBull | PatternTag::LiqBear => Self::LIQUIDITY_SWEEP,
            PatternTag::BosUp | PatternTag::BosDown => Self::BREAK_OF_STRUCTURE,
        }
    }
}
