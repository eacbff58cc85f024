//! Index page handler.

use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;
use tracing::debug;

use crate::response::index_html;
use crate::state::AppState;

/// Handle GET / requests
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    debug!(endpoint = "/", "Serving route index");
    Html(index_html(&state.dates))
}
