//! My Notes API - REST Layer
//!
//! Axum server exposing note CRUD over a [`mynotes_storage::NoteTable`].
//! Every response uses the `{success, message?, data?}` envelope.

pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::{build_cors_layer, create_api_router};
pub use telemetry::{init_tracer, TelemetryConfig};
