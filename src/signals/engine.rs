//! Signal engine facade bound to one configuration.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::decision::{Decision, Evaluation};
use crate::models::market::{MarketMeta, MultiTimeframeData};
use crate::signals::consensus;

/// Stateless evaluator; holds only its validated configuration.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    config: EngineConfig,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a request and return the consensus decision.
    pub fn evaluate(&self, data: &MultiTimeframeData, meta: &MarketMeta) -> Result<Decision> {
        consensus::evaluate(data, meta, &self.config)
    }

    /// Evaluate and return the full per-timeframe breakdown (for API responses/debugging)
    pub fn evaluate_detailed(
        &self,
        data: &MultiTimeframeData,
        meta: &MarketMeta,
    ) -> Result<Evaluation> {
        consensus::evaluate_detailed(data, meta, &self.config)
    }
}
