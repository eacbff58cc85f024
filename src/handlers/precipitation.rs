//! Precipitation endpoint handler.
//!
//! Returns every precipitation reading, across all stations, from the last
//! year of the dataset.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::handle_store_error;
use crate::logging::{generate_request_id, log_request_success};
use crate::response::precipitation_json;
use crate::state::AppState;
use crate::store;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let start_date = state.dates.one_year_before_iso();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        start_date = %start_date,
        "Processing precipitation request"
    );

    let result = state
        .store
        .run(move |conn| store::precipitation_since(conn, &start_date))
        .await;

    match result {
        Ok(rows) => {
            log_request_success(ENDPOINT, &request_id, start_time, rows.len());
            Json(precipitation_json(rows)).into_response()
        }
        Err(error) => handle_store_error(error, ENDPOINT, &request_id, None),
    }
}
