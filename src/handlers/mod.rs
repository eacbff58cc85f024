//! HTTP request handlers for the climate API.
//!
//! This module contains all the endpoint handlers for the web server.

use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ClimateError;
use crate::logging::log_request_error;

pub mod heartbeat;
pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temp;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use index::index_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temp::{temp_range_handler, temp_start_handler};
pub use tobs::tobs_handler;

/// Log a failed store query and turn it into an error response
pub(crate) fn handle_store_error(
    error: ClimateError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        error.status_code(),
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
