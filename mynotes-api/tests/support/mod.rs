//! Helpers shared by the router integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use mynotes_api::{create_api_router, ApiConfig};
use mynotes_storage::{InMemoryNoteTable, NoteTable};
use serde_json::Value;
use tower::ServiceExt;

/// Router over an in-memory table, plus the table for direct inspection.
pub fn test_app() -> (Router, Arc<InMemoryNoteTable>) {
    let table = Arc::new(InMemoryNoteTable::new());
    (app_with_table(table.clone()), table)
}

pub fn app_with_table(table: Arc<dyn NoteTable>) -> Router {
    create_api_router(table, &ApiConfig::default())
}

/// Send a request with an optional JSON body and decode the JSON response.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Ids from a `GET /notes` response body, in response order.
pub fn listed_ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|notes| {
            notes
                .iter()
                .filter_map(|n| n["noteId"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
