//! Unit tests for signal extraction

use crate::fixtures::*;
use strikezone::models::{Direction, PatternTag, Signal};
use strikezone::signals::{extract, net_direction};

#[test]
fn test_extract_insufficient_data() {
    assert_eq!(extract(&[]), Signal::neutral());
    let bars = bullish_series();
    let signal = extract(&bars[1..]);
    assert_eq!(signal.direction, Direction::None);
    assert_eq!(signal.score, 0.0);
    assert!(signal.patterns.is_empty());
}

#[test]
fn test_extract_bullish_series() {
    let signal = extract(&bullish_series());
    assert_eq!(
        signal.patterns,
        vec![PatternTag::BullEngulf, PatternTag::Fvg, PatternTag::BosUp]
    );
    assert_eq!(signal.score, 3.1);
    assert_eq!(signal.direction, Direction::Bullish);
}

#[test]
fn test_extract_bearish_series() {
    let signal = extract(&bearish_series());
    assert_eq!(
        signal.patterns,
        vec![PatternTag::BearEngulf, PatternTag::Fvg, PatternTag::BosDown]
    );
    assert_eq!(signal.score, 3.1);
    assert_eq!(signal.direction, Direction::Bearish);
}

#[test]
fn test_extract_hammer_with_sweep() {
    let signal = extract(&hammer_series());
    assert_eq!(
        signal.patterns,
        vec![PatternTag::Hammer, PatternTag::Fvg, PatternTag::LiqBull]
    );
    assert_eq!(signal.score, 3.1);
    assert_eq!(signal.direction, Direction::Bullish);
}

#[test]
fn test_extract_inside_break() {
    let signal = extract(&inside_series());
    assert_eq!(
        signal.patterns,
        vec![PatternTag::BullEngulf, PatternTag::InsideBreak]
    );
    assert_eq!(signal.score, 2.2);
    assert_eq!(signal.direction, Direction::Bullish);
}

#[test]
fn test_extract_quiet_series() {
    assert_eq!(extract(&quiet_series()), Signal::neutral());
}

#[test]
fn test_extract_uses_last_three_bars_only() {
    let mut bars = vec![
        bar(50.0, 80.0, 40.0, 75.0, 9000.0),
        bar(75.0, 76.0, 20.0, 21.0, 10.0),
    ];
    bars.extend(bullish_series());
    assert_eq!(extract(&bars), extract(&bullish_series()));
}

#[test]
fn test_fvg_is_direction_neutral() {
    assert_eq!(net_direction(&[PatternTag::Fvg]), Direction::None);
    assert_eq!(
        net_direction(&[PatternTag::Fvg, PatternTag::BosDown]),
        Direction::Bearish
    );
}

#[test]
fn test_opposing_tags_cancel() {
    assert_eq!(
        net_direction(&[PatternTag::Hammer, PatternTag::BearEngulf]),
        Direction::None
    );
    assert_eq!(
        net_direction(&[PatternTag::Hammer, PatternTag::BearEngulf, PatternTag::LiqBull]),
        Direction::Bullish
    );
}
