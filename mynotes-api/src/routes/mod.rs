//! REST API Routes Module
//!
//! Includes:
//! - Note CRUD routes under /notes
//! - Health check at /health
//! - CORS support for the browser UI
//! - Envelope-shaped 404 for unknown paths

pub mod health;
pub mod note;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    Router,
};
use mynotes_storage::NoteTable;
use tower_http::cors::{Any, CorsLayer};

use crate::config::{ApiConfig, ANY_ORIGIN};
use crate::error::ApiError;
use crate::telemetry::observability_middleware;

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// A `*` entry allows every origin; otherwise only the listed origins.
pub fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any_origin() {
        tracing::info!("CORS: allowing all origins");
        cors.allow_origin(Any)
    } else {
        tracing::info!("CORS: allowing origins: {:?}", config.cors_origins);
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter(|o| o.as_str() != ANY_ORIGIN)
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}

/// Create the complete API router.
///
/// - Note CRUD at /notes and /notes/:id
/// - Health check at /health
/// - Envelope 404 for everything else
///
/// Execution order: CORS -> Observability -> Handler
pub fn create_api_router(table: Arc<dyn NoteTable>, api_config: &ApiConfig) -> Router {
    Router::new()
        .merge(health::create_router())
        .merge(note::create_router(table))
        .fallback(route_not_found)
        .layer(from_fn(observability_middleware))
        .layer(build_cors_layer(api_config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use mynotes_storage::InMemoryNoteTable;
    use tower::ServiceExt;

    fn app(config: &ApiConfig) -> Router {
        create_api_router(Arc::new(InMemoryNoteTable::new()), config)
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/notes")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let response = app(&ApiConfig::default())
            .oneshot(preflight("http://localhost:5173"))
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn test_cors_omits_header_for_other_origin() {
        let response = app(&ApiConfig::default())
            .oneshot(preflight("https://evil.example.com"))
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_wildcard() {
        let config = ApiConfig {
            cors_origins: vec!["*".to_string()],
            ..ApiConfig::default()
        };
        let response = app(&config)
            .oneshot(preflight("https://anywhere.example.com"))
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_enveloped_404() {
        let response = app(&ApiConfig::default())
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"success": false, "message": "Not Found"}));
    }
}
