//! My Notes Telemetry
//!
//! Structured logging for the API server: subscriber setup and a
//! per-request observability middleware.

pub mod middleware;
pub mod tracer;

pub use middleware::observability_middleware;
pub use tracer::{init_tracer, LogFormat, TelemetryConfig};
