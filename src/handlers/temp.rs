//! Temperature statistics endpoint handlers.
//!
//! Dates come straight from the path and are compared as text, so a
//! malformed date yields an empty range (null statistics) rather than a 400.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::handle_store_error;
use crate::logging::{generate_request_id, log_request_success};
use crate::response::temp_stats_json;
use crate::state::AppState;
use crate::store;

const ENDPOINT: &str = "/api/v1.0/temp";

/// Handle GET /api/v1.0/temp/:start requests.
///
/// The range ends at the startup `one_year_before` date.
pub async fn temp_start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    let end = state.dates.one_year_before_iso();
    temp_stats_response(state, start, end).await
}

/// Handle GET /api/v1.0/temp/:start/:end requests
pub async fn temp_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    temp_stats_response(state, start, end).await
}

async fn temp_stats_response(state: Arc<AppState>, start: String, end: String) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let params = format!("start={}, end={}", start, end);

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        start = %start,
        end = %end,
        "Processing temperature stats request"
    );

    let result = state
        .store
        .run(move |conn| store::temperature_stats(conn, &start, &end))
        .await;

    match result {
        Ok(stats) => {
            if stats.is_empty() {
                debug!(request_id = %request_id, params = %params, "No rows in range");
            }
            log_request_success(ENDPOINT, &request_id, start_time, 1);
            Json(temp_stats_json(stats)).into_response()
        }
        Err(error) => handle_store_error(error, ENDPOINT, &request_id, Some(&params)),
    }
}
