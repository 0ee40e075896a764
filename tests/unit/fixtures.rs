//! Shared bar fixtures for unit tests

#![allow(dead_code)]

use strikezone::models::{Bar, MarketMeta, MultiTimeframeData};

pub fn bar(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
    Bar::new(open, high, low, close, volume)
}

/// bull_engulf + fvg + bos_up, score 3.1
pub fn bullish_series() -> Vec<Bar> {
    vec![
        bar(100.0, 101.0, 99.0, 100.0, 100.0),
        bar(100.0, 101.0, 99.0, 99.5, 100.0),
        bar(99.4, 102.5, 99.2, 102.4, 150.0),
    ]
}

/// bear_engulf + fvg + bos_down, score 3.1
pub fn bearish_series() -> Vec<Bar> {
    vec![
        bar(100.0, 101.0, 99.0, 100.0, 100.0),
        bar(100.0, 101.0, 99.0, 100.5, 100.0),
        bar(100.6, 100.8, 97.5, 97.6, 150.0),
    ]
}

/// hammer + fvg + liq_bull, score 3.1
pub fn hammer_series() -> Vec<Bar> {
    vec![
        bar(100.0, 101.0, 99.0, 100.0, 100.0),
        bar(100.0, 101.0, 99.0, 100.0, 150.0),
        bar(100.0, 101.0, 95.0, 100.5, 200.0),
    ]
}

/// bull_engulf + inside_break, score 2.2
pub fn inside_series() -> Vec<Bar> {
    vec![
        bar(100.0, 101.0, 99.0, 100.0, 100.0),
        bar(100.0, 110.0, 90.0, 100.0, 100.0),
        bar(95.0, 105.0, 94.0, 104.0, 100.0),
    ]
}

/// No pattern fires.
pub fn quiet_series() -> Vec<Bar> {
    vec![bar(100.0, 101.0, 99.0, 100.0, 100.0); 3]
}

/// Normal regime: thresholds (1.5, 2.5).
pub fn normal_meta() -> MarketMeta {
    MarketMeta::new(15.0, 1.0, 1.0)
}

pub fn htf_up() -> Vec<Bar> {
    vec![
        bar(100.0, 101.0, 99.0, 100.0, 1000.0),
        bar(100.0, 102.0, 99.5, 101.0, 1000.0),
    ]
}

pub fn htf_down() -> Vec<Bar> {
    vec![
        bar(100.0, 101.0, 99.0, 100.0, 1000.0),
        bar(100.0, 100.5, 98.0, 99.0, 1000.0),
    ]
}

/// Populate one timeframe for all three legs.
pub fn with_timeframe(
    data: MultiTimeframeData,
    timeframe: &str,
    spot: Vec<Bar>,
    ce: Vec<Bar>,
    pe: Vec<Bar>,
) -> MultiTimeframeData {
    use strikezone::models::Leg;
    data.with_series(Leg::Spot, timeframe, spot)
        .with_series(Leg::Ce, timeframe, ce)
        .with_series(Leg::Pe, timeframe, pe)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
