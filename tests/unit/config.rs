//! Unit tests for engine configuration

use strikezone::config::{
    is_production, parse_timeframes, EngineConfig, DEFAULT_CONSENSUS, DEFAULT_LOG_FILTER,
};
use tracing_subscriber::EnvFilter;
use strikezone::EngineError;

#[test]
fn test_config_default() {
    let config = EngineConfig::default();
    assert_eq!(config.evaluated_timeframes, vec!["3min", "5min", "15min"]);
    assert_eq!(config.consensus_needed, DEFAULT_CONSENSUS);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_timeframes() {
    assert_eq!(parse_timeframes(" 1min, ,5min "), vec!["1min", "5min"]);
    assert!(parse_timeframes("").is_empty());
}

#[test]
fn test_validate_rejects_zero_consensus() {
    let config = EngineConfig::new(vec!["3min".to_string()], 0);
    assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
}

#[test]
fn test_deserialize_with_defaults() {
    let config: EngineConfig = serde_json::from_str(r#"{"consensus_needed": 3}"#).unwrap();
    assert_eq!(config.consensus_needed, 3);
    assert_eq!(config.evaluated_timeframes.len(), 3);
}

#[test]
fn test_from_env() {
    std::env::set_var("STRIKEZONE_TIMEFRAMES", "1min,3min");
    std::env::set_var("STRIKEZONE_CONSENSUS", "1");
    let config = EngineConfig::from_env();
    std::env::remove_var("STRIKEZONE_TIMEFRAMES");
    std::env::remove_var("STRIKEZONE_CONSENSUS");

    assert_eq!(config.evaluated_timeframes, vec!["1min", "3min"]);
    assert_eq!(config.consensus_needed, 1);
}

#[test]
fn test_is_production() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
    assert!(!is_production("Production"));
}

#[test]
fn test_default_log_filter_parses() {
    assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
}
