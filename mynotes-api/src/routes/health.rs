//! Health Check Endpoint
//!
//! `GET /health` reports process liveness. It does not touch the datastore.

use axum::{response::IntoResponse, routing::get, Json, Router};
use mynotes_core::Envelope;

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(Envelope::<()>::message("OK"))
}

pub fn create_router() -> Router {
    Router::new().route("/health", get(health))
}
