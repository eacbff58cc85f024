//! Logging utilities for the climate-api server.
//!
//! This module provides structured logging helpers so request and startup
//! logs carry searchable fields rather than free text.

use std::time::Instant;
use tracing::{error, info, Level};

use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use uuid::Uuid;

use crate::error::ClimateError;
use crate::models::StoreSummary;

/// Creates the tracing layer for HTTP request/response logging
pub fn create_http_trace_layer() -> TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    let response_formatter = DefaultOnResponse::new()
        .level(Level::DEBUG)
        .latency_unit(LatencyUnit::Micros);

    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(response_formatter)
}

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Run `f` under a default info-level subscriber.
///
/// Used before the configured subscriber exists, so startup failures such as
/// an unreadable config file still reach the log.
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt().with_env_filter("info").finish();
    tracing::subscriber::with_default(subscriber, f)
}

/// Log a completed request with its timing and result size
pub fn log_request_success(endpoint: &str, request_id: &str, start_time: Instant, row_count: usize) {
    info!(
        endpoint = endpoint,
        request_id = request_id,
        duration_us = start_time.elapsed().as_micros() as u64,
        row_count = row_count,
        "Request successful"
    );
}

/// Log what was found in the store at startup
pub fn log_store_stats(database_path: &str, summary: &StoreSummary) {
    info!(
        operation = "store_load",
        database_path = database_path,
        station_count = summary.station_count,
        measurement_count = summary.measurement_count,
        first_date = summary.first_date.as_deref().unwrap_or("none"),
        last_date = summary.last_date.as_deref().unwrap_or("none"),
        "Store opened successfully"
    );
}

/// Log an error with context
pub fn log_error(error: &ClimateError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}

/// Log an error that occurred during request processing
pub fn log_request_error(
    error: &ClimateError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) {
    error!(
        error = %error,
        endpoint = endpoint,
        request_id = request_id,
        params = params.unwrap_or("none"),
        "Request processing error"
    );
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
