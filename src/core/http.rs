//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::compress::compress;
use crate::config::{EngineConfig, SERVICE_NAME};
use crate::metrics::Metrics;
use crate::models::market::{MarketMeta, MultiTimeframeData};
use crate::signals::engine::SignalEngine;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub engine: Arc<SignalEngine>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Error body returned to callers: `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

fn field<T: DeserializeOwned>(body: &Value, key: &str) -> Result<T, ApiError> {
    serde_json::from_value(body[key].clone())
        .map_err(|e| ApiError::bad_request(format!("Invalid '{}': {}", key, e)))
}

/// Falsy JSON payloads carry no request: `null`, `false`, `0`, `""`, `[]`, `{}`.
fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Validate the request body and return the compressed engine inputs.
fn parse_request(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(MultiTimeframeData, MarketMeta), ApiError> {
    let Json(body) =
        payload.map_err(|_| ApiError::bad_request("Invalid or missing JSON format"))?;

    if is_empty_body(&body) {
        return Err(ApiError::bad_request("No JSON body received"));
    }

    let present = |key: &str| match body.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Object(map)) => !map.is_empty(),
        Some(_) => true,
    };
    if !present("multi_tf_data") || !present("market_meta") {
        return Err(ApiError::bad_request(
            "Missing required keys: 'multi_tf_data' and/or 'market_meta'",
        ));
    }

    let data: MultiTimeframeData = field(&body, "multi_tf_data")?;
    let meta: MarketMeta = field(&body, "market_meta")?;
    let compressed = compress(&data, &meta);
    Ok((compressed.data, compressed.market_meta))
}

fn engine_error(e: crate::error::EngineError) -> ApiError {
    warn!(error = %e, "signal evaluation rejected");
    ApiError {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        message: e.to_string(),
    }
}

/// Evaluate a request and return the final decision
async fn evaluate_signal(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let (data, meta) = parse_request(payload)?;
    let decision = state.engine.evaluate(&data, &meta).map_err(engine_error)?;
    state.metrics.record_decision(decision.action);
    Ok(Json(json!(decision)))
}

/// Evaluate a request and return the decision with its per-timeframe breakdown
async fn explain_signal(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let (data, meta) = parse_request(payload)?;
    let evaluation = state
        .engine
        .evaluate_detailed(&data, &meta)
        .map_err(engine_error)?;
    state.metrics.record_decision(evaluation.decision.action);
    Ok(Json(json!(evaluation)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/signal", post(evaluate_signal))
        .route("/signal/explain", post(explain_signal))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    config: EngineConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let metrics = Arc::new(Metrics::new()?);
    let engine = Arc::new(SignalEngine::new(config)?);

    info!(
        timeframes = ?engine.config().evaluated_timeframes,
        consensus_needed = engine.config().consensus_needed,
        "Signal engine configured"
    );

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        engine,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
