//! Router integration tests for the note endpoints.

mod support;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use mynotes_core::{Note, NoteId, NOTE_ID_LEN};
use mynotes_test_utils::{assertions, fixtures, FailingNoteTable};
use serde_json::json;

use support::{app_with_table, listed_ids, send, send_request, test_app};

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "OK"}));
}

#[tokio::test]
async fn create_update_delete_lifecycle() {
    let (app, _) = test_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/notes",
        Some(json!({"title": "A", "description": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    assert_eq!(created["message"], "Note created");
    assert_eq!(created["data"]["title"], "A");
    assert_eq!(created["data"]["description"], "");
    assert_eq!(created["data"]["createdAt"], created["data"]["updatedAt"]);

    let id = created["data"]["noteId"].as_str().unwrap().to_string();
    assert_eq!(id.len(), NOTE_ID_LEN);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/notes/{}", id),
        Some(json!({"title": "B", "description": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Note updated");
    assert_eq!(updated["data"]["noteId"], id.as_str());
    assert_eq!(updated["data"]["title"], "B");
    assert_eq!(updated["data"]["description"], "x");
    assert_eq!(updated["data"]["createdAt"], created["data"]["createdAt"]);

    let (status, deleted) = send(&app, Method::DELETE, &format!("/notes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"success": true, "message": "Note deleted"}));

    let (status, listed) = send(&app, Method::GET, "/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!listed_ids(&listed).contains(&id));
}

#[tokio::test]
async fn created_note_appears_in_list() {
    let (app, _) = test_app();
    let (_, created) = send(&app, Method::POST, "/notes", Some(json!({"title": "Listed"}))).await;
    let id = created["data"]["noteId"].as_str().unwrap().to_string();

    let (_, listed) = send(&app, Method::GET, "/notes", None).await;
    assert_eq!(listed_ids(&listed), vec![id]);
}

#[tokio::test]
async fn update_unknown_id_is_404_and_creates_nothing() {
    let (app, table) = test_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/notes/doesnotexist",
        Some(json!({"title": "Z"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "Note not found"}));
    assert!(table.is_empty().unwrap());
}

#[tokio::test]
async fn blank_title_is_rejected_without_write() {
    let (app, table) = test_app();

    let (status, body) = send(&app, Method::POST, "/notes", Some(json!({"title": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "message": "Title is required"}));

    let (status, _) = send(&app, Method::POST, "/notes", Some(json!({"description": "no title"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(table.is_empty().unwrap());
}

#[tokio::test]
async fn blank_title_on_update_leaves_note_untouched() {
    let existing = fixtures::note_at(
        "n1",
        "Keep me",
        "as is",
        "2024-01-01T00:00:00.000Z",
        "2024-01-01T00:00:00.000Z",
    );
    let table = Arc::new(mynotes_storage::InMemoryNoteTable::with_notes([existing.clone()]));
    let app = app_with_table(table.clone());

    let (status, body) = send(&app, Method::PUT, "/notes/n1", Some(json!({"title": ""}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Title is required");
    assert_eq!(table.get(&existing.note_id).unwrap(), Some(existing));
}

#[tokio::test]
async fn payload_fields_are_trimmed() {
    let (app, _) = test_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/notes",
        Some(json!({"title": "  Padded  ", "description": "\tbody\n"})),
    )
    .await;

    assert_eq!(created["data"]["title"], "Padded");
    assert_eq!(created["data"]["description"], "body");
}

#[tokio::test]
async fn malformed_json_is_400_envelope() {
    let (app, table) = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/notes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let (status, body) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().is_some_and(|m| m.starts_with("Invalid JSON")));
    assert!(table.is_empty().unwrap());
}

#[tokio::test]
async fn missing_body_reads_as_empty_payload() {
    let (app, table) = test_app();

    let (status, body) = send(&app, Method::POST, "/notes", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "message": "Title is required"}));
    assert!(table.is_empty().unwrap());
}

#[tokio::test]
async fn non_json_body_reads_as_empty_payload() {
    let table = Arc::new(fixtures::seeded_table());
    let app = app_with_table(table.clone());
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/notes/note-oldest")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("{\"title\": \"Sneaky\"}"))
        .unwrap();

    let (status, body) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "message": "Title is required"}));
    let stored = table.get(&NoteId::from("note-oldest")).unwrap().unwrap();
    assert_ne!(stored.title, "Sneaky");
}

#[tokio::test]
async fn delete_unknown_id_succeeds_and_leaves_list_alone() {
    let table = Arc::new(fixtures::seeded_table());
    let app = app_with_table(table.clone());

    let (status, body) = send(&app, Method::DELETE, "/notes/never-existed", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Note deleted"}));
    assert_eq!(table.len().unwrap(), fixtures::sample_notes().len());
}

#[tokio::test]
async fn list_is_sorted_by_updated_at_descending() {
    let app = app_with_table(Arc::new(fixtures::seeded_table()));

    let (status, body) = send(&app, Method::GET, "/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed_ids(&body),
        vec!["note-newest", "note-middle", "note-oldest"]
    );

    let notes: Vec<Note> = serde_json::from_value(body["data"].clone()).unwrap();
    assertions::assert_sorted_by_recent_update(&notes);
}

#[tokio::test]
async fn updated_note_moves_to_front() {
    let app = app_with_table(Arc::new(fixtures::seeded_table()));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/notes/note-oldest",
        Some(json!({"title": "Groceries", "description": "Add coffee"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/notes", None).await;
    assert_eq!(listed_ids(&body)[0], "note-oldest");
}

#[tokio::test]
async fn datastore_failure_is_500_with_message() {
    let app = app_with_table(Arc::new(FailingNoteTable::new("table is gone")));

    let (status, body) = send(&app, Method::GET, "/notes", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "message": "Scan failed: table is gone"}));

    let (status, body) = send(&app, Method::POST, "/notes", Some(json!({"title": "A"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "PutItem failed: table is gone");

    let (status, _) = send(&app, Method::DELETE, "/notes/x", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unknown_route_is_404_envelope() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/nowhere", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "Not Found"}));
}
