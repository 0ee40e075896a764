//! Engine configuration and environment loading

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{EngineError, Result};

pub const DEFAULT_TIMEFRAMES: [&str; 3] = ["3min", "5min", "15min"];
pub const DEFAULT_CONSENSUS: usize = 2;

/// Name reported by `/health` and attached to the startup log event.
pub const SERVICE_NAME: &str = "strikezone-signal-engine";

/// Log directives used when `RUST_LOG` is unset: the engine, the server
/// binary and request tracing at `info`, everything else at `warn`.
pub const DEFAULT_LOG_FILTER: &str = "warn,strikezone=info,api_server=info,tower_http=info";

/// Deployment environment name (`production`, `sandbox`, ...).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

/// Timeframes to evaluate and how many of them must agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_timeframes")]
    pub evaluated_timeframes: Vec<String>,
    #[serde(default = "default_consensus")]
    pub consensus_needed: usize,
}

fn default_timeframes() -> Vec<String> {
    DEFAULT_TIMEFRAMES.iter().map(|tf| tf.to_string()).collect()
}

fn default_consensus() -> usize {
    DEFAULT_CONSENSUS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            evaluated_timeframes: default_timeframes(),
            consensus_needed: default_consensus(),
        }
    }
}

impl EngineConfig {
    pub fn new(evaluated_timeframes: Vec<String>, consensus_needed: usize) -> Self {
        Self {
            evaluated_timeframes,
            consensus_needed,
        }
    }

    /// Load from `STRIKEZONE_TIMEFRAMES` (comma-separated) and
    /// `STRIKEZONE_CONSENSUS`, falling back to defaults for unset or
    /// unparsable values.
    pub fn from_env() -> Self {
        let evaluated_timeframes = env::var("STRIKEZONE_TIMEFRAMES")
            .ok()
            .map(|s| parse_timeframes(&s))
            .filter(|tfs| !tfs.is_empty())
            .unwrap_or_else(default_timeframes);

        let consensus_needed = env::var("STRIKEZONE_CONSENSUS")
            .ok()
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(DEFAULT_CONSENSUS);

        Self {
            evaluated_timeframes,
            consensus_needed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.evaluated_timeframes.is_empty() {
            return Err(EngineError::InvalidConfig(
                "at least one timeframe must be evaluated".to_string(),
            ));
        }
        if self.consensus_needed == 0 {
            return Err(EngineError::InvalidConfig(
                "consensus_needed must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Split a comma-separated timeframe list, dropping blanks.
pub fn parse_timeframes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tf| !tf.is_empty())
        .map(str::to_string)
        .collect()
}
