//! Stations endpoint handler.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::handle_store_error;
use crate::logging::{generate_request_id, log_request_success};
use crate::state::AppState;
use crate::store;

const ENDPOINT: &str = "/api/v1.0/stations";

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing stations request"
    );

    match state.store.run(store::list_stations).await {
        Ok(stations) => {
            log_request_success(ENDPOINT, &request_id, start_time, stations.len());
            Json(stations).into_response()
        }
        Err(error) => handle_store_error(error, ENDPOINT, &request_id, None),
    }
}
