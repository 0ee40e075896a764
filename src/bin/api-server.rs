//! Strikezone API Server
//!
//! HTTP API exposing the signal engine. Stateless; scale horizontally.

use dotenvy::dotenv;
use std::env;
use strikezone::config::EngineConfig;
use strikezone::core::http::start_server;
use strikezone::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let config = EngineConfig::from_env();
    config.validate()?;

    info!(
        port = port,
        timeframes = ?config.evaluated_timeframes,
        consensus_needed = config.consensus_needed,
        "Starting Strikezone API Server on http://0.0.0.0:{}",
        port
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
