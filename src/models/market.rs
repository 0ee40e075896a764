//! Market-wide context and the multi-timeframe request payload

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::bar::{Bar, BarSeries};

/// Volatility and trend context shared by every timeframe of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMeta {
    pub vix: f64,
    pub atr_14: f64,
    pub atr_median: f64,
    #[serde(default, deserialize_with = "null_as_false")]
    pub ce_vol_spike: bool,
    #[serde(default)]
    pub higher_tf_bars: Vec<Bar>,
}

impl MarketMeta {
    pub fn new(vix: f64, atr_14: f64, atr_median: f64) -> Self {
        Self {
            vix,
            atr_14,
            atr_median,
            ce_vol_spike: false,
            higher_tf_bars: Vec::new(),
        }
    }

    pub fn with_ce_vol_spike(mut self, spike: bool) -> Self {
        self.ce_vol_spike = spike;
        self
    }

    pub fn with_higher_tf_bars(mut self, bars: Vec<Bar>) -> Self {
        self.higher_tf_bars = bars;
        self
    }
}

// Upstream collaborators send `null` when the spike flag is unknown.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// The three tracked instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    Spot,
    Ce,
    Pe,
}

impl Leg {
    pub const ALL: [Leg; 3] = [Leg::Spot, Leg::Ce, Leg::Pe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Leg::Spot => "spot",
            Leg::Ce => "ce",
            Leg::Pe => "pe",
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bar history per leg, keyed by timeframe label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiTimeframeData {
    #[serde(default)]
    pub spot: BTreeMap<String, BarSeries>,
    #[serde(default)]
    pub ce: BTreeMap<String, BarSeries>,
    #[serde(default)]
    pub pe: BTreeMap<String, BarSeries>,
}

impl MultiTimeframeData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leg(&self, leg: Leg) -> &BTreeMap<String, BarSeries> {
        match leg {
            Leg::Spot => &self.spot,
            Leg::Ce => &self.ce,
            Leg::Pe => &self.pe,
        }
    }

    pub fn leg_mut(&mut self, leg: Leg) -> &mut BTreeMap<String, BarSeries> {
        match leg {
            Leg::Spot => &mut self.spot,
            Leg::Ce => &mut self.ce,
            Leg::Pe => &mut self.pe,
        }
    }

    /// Look up the series for one leg and timeframe.
    pub fn series(&self, leg: Leg, timeframe: &str) -> Option<&[Bar]> {
        self.leg(leg).get(timeframe).map(Vec::as_slice)
    }

    pub fn with_series(mut self, leg: Leg, timeframe: impl Into<String>, bars: BarSeries) -> Self {
        self.leg_mut(leg).insert(timeframe.into(), bars);
        self
    }
}

/// Coarse volatility classification derived from VIX and ATR-vs-baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    #[serde(rename = "High_Volatility")]
    HighVolatility,
    #[serde(rename = "Low_Volatility")]
    LowVolatility,
    #[serde(rename = "Normal_Market")]
    NormalMarket,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::HighVolatility => "High_Volatility",
            Regime::LowVolatility => "Low_Volatility",
            Regime::NormalMarket => "Normal_Market",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
