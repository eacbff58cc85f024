//! Temperature observations endpoint handler.
//!
//! Returns the last year of temperatures for the station with the most
//! measurement rows, each keyed by that station's code.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::handle_store_error;
use crate::logging::{generate_request_id, log_request_success};
use crate::response::tobs_json;
use crate::state::AppState;
use crate::store;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let start_date = state.dates.one_year_before_iso();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        start_date = %start_date,
        "Processing tobs request"
    );

    let result = state
        .store
        .run(move |conn| store::most_active_station_temps(conn, &start_date))
        .await;

    match result {
        Ok(rows) => {
            log_request_success(ENDPOINT, &request_id, start_time, rows.len());
            Json(tobs_json(rows)).into_response()
        }
        Err(error) => handle_store_error(error, ENDPOINT, &request_id, None),
    }
}
