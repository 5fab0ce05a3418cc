//! JSON body extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Request body parsed as arbitrary JSON.
///
/// Field-level checks happen in the note validator, so any well-formed JSON
/// value is accepted here. A missing body, or one not sent as JSON, reads as
/// `{}` and fails validation like any payload without a title. Unparseable
/// JSON rejects with a 400 envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPayload(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(status = %rejection.status(), "Rejected request body");
            ApiError::invalid_input(rejection.body_text())
        })?;

        if !is_json || bytes.trim_ascii().is_empty() {
            return Ok(JsonPayload(Value::Object(Map::new())));
        }

        Ok(JsonPayload(serde_json::from_slice(&bytes)?))
    }
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
