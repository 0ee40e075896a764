//! Tracing subscriber setup
//!
//! Production emits one flattened JSON object per event for log shipping.
//! Every other environment gets compact, colored lines with line numbers.

use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{get_environment, is_production, DEFAULT_LOG_FILTER, SERVICE_NAME};

/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Call once, before the server starts.
pub fn init_logging() {
    let environment = get_environment();
    let json = is_production(&environment);
    let registry = tracing_subscriber::registry().with(env_filter());

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_line_number(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    }

    info!(
        service = SERVICE_NAME,
        environment = %environment,
        json,
        "logging initialized"
    );
}
