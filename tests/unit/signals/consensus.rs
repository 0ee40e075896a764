//! Unit tests for consensus selection

use strikezone::models::{Action, Confidence, Decision};
use strikezone::signals::select_consensus;

fn call(score: f64) -> Decision {
    Decision::new(Action::BuyCall, Confidence::Medium, 70, score)
}

fn put(score: f64) -> Decision {
    Decision::new(Action::BuyPut, Confidence::Medium, 70, score)
}

fn none(score: f64) -> Decision {
    Decision::new(Action::NoTrade, Confidence::Insufficient, 0, score)
}

#[test]
fn test_majority_picks_highest_score() {
    let decisions = vec![call(2.1), call(3.4), none(0.0)];
    assert_eq!(select_consensus(&decisions, 2), call(3.4));
}

#[test]
fn test_no_consensus() {
    let decisions = vec![call(2.1), put(3.4), none(0.0)];
    assert_eq!(select_consensus(&decisions, 2), Decision::no_trade());
}

#[test]
fn test_no_trade_result_shape() {
    let d = Decision::no_trade();
    assert_eq!(d.action, Action::NoTrade);
    assert_eq!(d.confidence, Confidence::Insufficient);
    assert_eq!(d.position_size_pct, 0);
    assert_eq!(d.alignment_score, 0.0);
}

#[test]
fn test_winning_decision_returned_unchanged() {
    let strong = Decision::new(Action::BuyPut, Confidence::High, 100, 5.0);
    let decisions = vec![put(3.0), strong.clone(), call(9.0)];
    assert_eq!(select_consensus(&decisions, 2), strong);
}

#[test]
fn test_tie_goes_to_earliest_timeframe() {
    let first = Decision::new(Action::BuyCall, Confidence::Medium, 70, 3.0);
    let second = Decision::new(Action::BuyCall, Confidence::High, 100, 3.0);
    let decisions = vec![none(0.0), first.clone(), second];
    assert_eq!(select_consensus(&decisions, 2), first);
}

#[test]
fn test_call_wins_simultaneous_tie() {
    let decisions = vec![put(6.0), call(2.0)];
    assert_eq!(select_consensus(&decisions, 1), call(2.0));
}

#[test]
fn test_consensus_count_above_agreeing_timeframes() {
    let decisions = vec![call(2.1), call(3.4), none(0.0)];
    assert_eq!(select_consensus(&decisions, 3), Decision::no_trade());
}

#[test]
fn test_empty_input() {
    let decisions: Vec<Decision> = Vec::new();
    assert_eq!(select_consensus(&decisions, 1), Decision::no_trade());
}
