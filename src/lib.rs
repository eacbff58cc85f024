//! # climate-api
//!
//! A small read-only JSON API over a SQLite climate-observation dataset.
//!
//! The store holds two tables, weather stations and their daily
//! measurements. The server answers a fixed set of questions about them:
//! the last year of precipitation, the list of stations, the last year of
//! temperatures at the busiest station, and min/avg/max temperature over a
//! date range.
//!
//! ## Architecture
//!
//! - **Store Layer**: read-only SQLite queries, one connection per request
//! - **Response Layer**: shapes query rows into the documented JSON
//! - **API Layer**: axum routes and handlers over a shared, immutable state

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{ClimateError, Result};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_error, log_request_error,
    log_request_success, log_store_stats, with_bootstrap_logging,
};
pub use models::{Measurement, Station, StoreSummary, TemperatureStats};
pub use routes::build_router;
pub use state::{AppState, ReferenceDates};
pub use store::Store;
