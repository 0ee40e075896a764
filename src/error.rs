//! Engine error types

use thiserror::Error;

use crate::models::market::Leg;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("missing bar series for leg '{leg}' timeframe '{timeframe}'")]
    MissingSeries { leg: Leg, timeframe: String },

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
