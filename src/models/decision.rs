//! Trade recommendation output

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::market::Regime;
use crate::models::signal::PatternTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    BuyCall,
    BuyPut,
    NoTrade,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::BuyCall => "BUY_CALL",
            Action::BuyPut => "BUY_PUT",
            Action::NoTrade => "NO_TRADE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Insufficient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub confidence: Confidence,
    pub position_size_pct: u8,
    pub alignment_score: f64,
}

impl Decision {
    pub fn new(
        action: Action,
        confidence: Confidence,
        position_size_pct: u8,
        alignment_score: f64,
    ) -> Self {
        Self {
            action,
            confidence,
            position_size_pct,
            alignment_score,
        }
    }

    /// The result returned when no action reaches consensus.
    pub fn no_trade() -> Self {
        Self::new(Action::NoTrade, Confidence::Insufficient, 0, 0.0)
    }

    pub fn is_trade(&self) -> bool {
        self.action != Action::NoTrade
    }
}

/// Pattern tags detected on each leg for one timeframe.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegPatterns {
    pub spot: Vec<PatternTag>,
    pub ce: Vec<PatternTag>,
    pub pe: Vec<PatternTag>,
}

/// Per-timeframe breakdown used for explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeReport {
    pub timeframe: String,
    pub regime: Regime,
    pub decision: Decision,
    pub patterns: LegPatterns,
    pub reasons: Vec<String>,
}

/// Final decision together with the timeframe reports it was chosen from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub decision: Decision,
    pub timeframes: Vec<TimeframeReport>,
}
