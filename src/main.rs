//! climate-api - a read-only JSON API over a SQLite climate dataset
//!
//! This is the main entry point for the climate-api server.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use climate_api::handlers::heartbeat::mark_start;
use climate_api::{build_router, init_tracing, log_error, log_store_stats, with_bootstrap_logging};
use climate_api::{AppState, ClimateError, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    mark_start();

    let config = with_bootstrap_logging(|| {
        Config::load().map_err(|e| {
            error!("Configuration error: {}", e);
            e
        })
    })?;
    init_tracing(&config.log_level);

    info!("Starting climate-api v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!("Opening store: {:?}", config.store.database_path);

    let app_state = AppState::load(config.clone()).map_err(|e| {
        log_error(&e, "store_load");
        e
    })?;

    app_state.validate().map_err(|e| {
        log_error(&e, "state_validation");
        e
    })?;

    log_store_stats(
        &config.store.database_path.display().to_string(),
        &app_state.summary,
    );

    let app = build_router(Arc::new(app_state));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| ClimateError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
