//! # Strikezone
//!
//! Rule-based, multi-timeframe signal engine for options decision support.
//! Given recent bars for an underlying and its call/put contracts across
//! several timeframes plus market context, it recommends buying a call,
//! buying a put, or standing aside.
//!
//! - `patterns`: stateless chart-pattern detectors
//! - `signals`: extraction, regime thresholds, alignment and consensus
//! - `compress`: request trimming ahead of evaluation
//! - `core`: HTTP transport

pub mod compress;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod patterns;
pub mod signals;

pub use config::EngineConfig;
pub use error::EngineError;
pub use signals::{evaluate, SignalEngine};
