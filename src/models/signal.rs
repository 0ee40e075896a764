//! Per-series signal produced by pattern extraction

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Bullish,
    Bearish,
    #[default]
    None,
}

impl Direction {
    /// True for `Bullish` or `Bearish`.
    pub fn is_directional(&self) -> bool {
        !matches!(self, Direction::None)
    }
}

/// Tags emitted by the pattern detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternTag {
    Hammer,
    ShootingStar,
    BullEngulf,
    BearEngulf,
    InsideBreak,
    Fvg,
    LiqBull,
    LiqBear,
    BosUp,
    BosDown,
}

impl PatternTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternTag::Hammer => "hammer",
            PatternTag::ShootingStar => "shooting_star",
            PatternTag::BullEngulf => "bull_engulf",
            PatternTag::BearEngulf => "bear_engulf",
            PatternTag::InsideBreak => "inside_break",
            PatternTag::Fvg => "fvg",
            PatternTag::LiqBull => "liq_bull",
            PatternTag::LiqBear => "liq_bear",
            PatternTag::BosUp => "bos_up",
            PatternTag::BosDown => "bos_down",
        }
    }

    /// Directional lean of the tag. A fair value gap marks expansion only
    /// and carries no lean.
    pub fn bias(&self) -> Direction {
        match self {
            PatternTag::Hammer
            | PatternTag::BullEngulf
            | PatternTag::InsideBreak
            | PatternTag::LiqBull
            | PatternTag::BosUp => Direction::Bullish,
            PatternTag::ShootingStar
            | PatternTag::BearEngulf
            | PatternTag::LiqBear
            | PatternTag::BosDown => Direction::Bearish,
            PatternTag::Fvg => Direction::None,
        }
    }
}

impl fmt::Display for PatternTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signal {
    pub direction: Direction,
    pub score: f64,
    pub patterns: Vec<PatternTag>,
}

impl Signal {
    pub fn new(direction: Direction, score: f64, patterns: Vec<PatternTag>) -> Self {
        Self {
            direction,
            score,
            patterns,
        }
    }

    /// The empty result for a series too short to inspect.
    pub fn neutral() -> Self {
        Self::default()
    }
}
