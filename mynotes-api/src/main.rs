//! My Notes API Server Entry Point
//!
//! Loads configuration, connects the note table and starts the Axum HTTP
//! server.

use axum::Router;
use mynotes_api::{create_api_router, init_tracer, ApiConfig, ApiError, ApiResult, TelemetryConfig};

#[tokio::main]
async fn main() -> ApiResult<()> {
    let telemetry_config = TelemetryConfig::from_env()?;
    init_tracer(&telemetry_config)?;

    let api_config = ApiConfig::from_env()?;
    let table = mynotes_storage::connect(&api_config.storage).await;

    let app: Router = create_api_router(table, &api_config);

    let addr = api_config.bind_addr();
    tracing::info!(%addr, backend = %api_config.storage.backend, "Starting My Notes API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
