//! Test utilities for API server integration tests

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use strikezone::config::EngineConfig;
use strikezone::core::http::{create_router, AppState, HealthStatus};
use strikezone::metrics::Metrics;
use strikezone::signals::SignalEngine;
use tokio::sync::RwLock;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    pub async fn new() -> Self {
        Self::with_config(EngineConfig::default()).await
    }

    pub async fn with_config(config: EngineConfig) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            engine: Arc::new(SignalEngine::new(config).expect("valid engine config")),
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}

fn bar(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Value {
    json!({ "open": open, "high": high, "low": low, "close": close, "volume": volume })
}

/// bull_engulf + fvg + bos_up, preceded by older history the server trims.
pub fn bullish_bars() -> Value {
    json!([
        bar(95.0, 96.0, 94.0, 95.5, 80.0),
        bar(100.0, 101.0, 99.0, 100.0, 100.0),
        bar(100.0, 101.0, 99.0, 99.5, 100.0),
        bar(99.4, 102.5, 99.2, 102.4, 150.0),
    ])
}

pub fn quiet_bars() -> Value {
    json!([
        bar(100.0, 101.0, 99.0, 100.0, 100.0),
        bar(100.0, 101.0, 99.0, 100.0, 100.0),
        bar(100.0, 101.0, 99.0, 100.0, 100.0),
    ])
}

/// Request where 3min and 5min agree on a call and 15min is flat.
pub fn bullish_request() -> Value {
    json!({
        "multi_tf_data": {
            "spot": { "3min": bullish_bars(), "5min": bullish_bars(), "15min": quiet_bars() },
            "ce": { "3min": bullish_bars(), "5min": bullish_bars(), "15min": quiet_bars() },
            "pe": { "3min": quiet_bars(), "5min": quiet_bars(), "15min": quiet_bars() }
        },
        "market_meta": {
            "vix": 15.0,
            "atr_14": 1.0,
            "atr_median": 1.0,
            "ce_vol_spike": false,
            "higher_tf_bars": [
                bar(99.0, 100.0, 98.0, 99.5, 1000.0),
                bar(100.0, 101.0, 99.0, 100.0, 1000.0),
                bar(100.0, 102.0, 99.5, 101.0, 1000.0)
            ]
        }
    })
}
