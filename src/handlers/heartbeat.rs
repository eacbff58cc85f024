//! Heartbeat endpoint handler.
//!
//! Returns server status information: uptime and what was found in the
//! store when the server started.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use crate::state::AppState;

/// Random per-process server ID
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> = once_cell::sync::Lazy::new(SystemTime::now);

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Dataset information
    pub dataset: DatasetInfo,
    /// Server status
    pub status: String,
}

/// Dataset information structure
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub database_path: String,
    pub station_count: usize,
    pub measurement_count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    /// Start of the default one-year window
    pub one_year_before: String,
}

impl DatasetInfo {
    fn from_state(state: &AppState) -> Self {
        Self {
            database_path: state.store.path().display().to_string(),
            station_count: state.summary.station_count,
            measurement_count: state.summary.measurement_count,
            first_date: state.summary.first_date.clone(),
            last_date: state.summary.last_date.clone(),
            one_year_before: state.dates.one_year_before_iso(),
        }
    }
}

/// Mark the process start; uptime is measured from the first call
pub fn mark_start() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    Json(HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        dataset: DatasetInfo::from_state(&state),
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::StoreSummary;
    use crate::state::ReferenceDates;
    use crate::store::{tests::populate, Store};

    #[tokio::test]
    async fn test_heartbeat_reports_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        populate(&rusqlite::Connection::open(&path).unwrap());

        let state = Arc::new(AppState::new(
            Config::default(),
            Store::new(&path).unwrap(),
            ReferenceDates::from_most_recent("2017-08-24").unwrap(),
            StoreSummary {
                station_count: 3,
                measurement_count: 8,
                first_date: Some("2016-08-22".to_string()),
                last_date: Some("2017-08-24".to_string()),
            },
        ));

        mark_start();
        let Json(response) = heartbeat_handler(State(state)).await;

        assert_eq!(response.status, "healthy");
        assert_eq!(response.server_id, *SERVER_ID);
        assert_eq!(response.dataset.station_count, 3);
        assert_eq!(response.dataset.measurement_count, 8);
        assert_eq!(response.dataset.one_year_before, "2016-08-24");
        assert!(response.dataset.database_path.ends_with("climate.sqlite"));
    }
}
