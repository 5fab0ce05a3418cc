//! End-to-end tests: a real API server on an ephemeral port, driven
//! through `NotesClient` and `NoteBoard`.

use std::sync::Arc;
use std::time::Duration;

use mynotes_api::{create_api_router, ApiConfig};
use mynotes_client::{ApiClientError, ClientConfig, NoteBoard, NotesApi, NotesClient};
use mynotes_core::{NoteId, NotePayload};
use mynotes_storage::{InMemoryNoteTable, NoteTable};
use mynotes_test_utils::{assertions, FailingNoteTable};

/// Serve the API over `table` and return its base URL.
async fn spawn_server(table: Arc<dyn NoteTable>) -> String {
    let app = create_api_router(table, &ApiConfig::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base: &str) -> NotesClient {
    NotesClient::new(&ClientConfig {
        api_base_url: base.to_string(),
        request_timeout_ms: 5_000,
    })
    .unwrap()
}

#[tokio::test]
async fn health_check() {
    let base = spawn_server(Arc::new(InMemoryNoteTable::new())).await;
    assert_eq!(client_for(&base).health().await.unwrap(), "OK");
}

#[tokio::test]
async fn client_crud_round_trip() {
    let base = spawn_server(Arc::new(InMemoryNoteTable::new())).await;
    let client = client_for(&base);

    let created = client
        .create_note(&NotePayload::new("  A  ", ""))
        .await
        .unwrap();
    assert_eq!(created.title, "A");
    assert_eq!(created.created_at, created.updated_at);

    let updated = client
        .update_note(&created.note_id, &NotePayload::new("B", "x"))
        .await
        .unwrap();
    assert_eq!(updated.note_id, created.note_id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.description, "x");

    let listed = client.list_notes().await.unwrap();
    assert_eq!(listed, vec![updated]);

    client.delete_note(&created.note_id).await.unwrap();
    let listed = client.list_notes().await.unwrap();
    assertions::assert_absent(&listed, &created.note_id);
}

#[tokio::test]
async fn server_errors_surface_envelope_message() {
    let base = spawn_server(Arc::new(InMemoryNoteTable::new())).await;
    let client = client_for(&base);

    let err = client
        .update_note(&NoteId::from("doesnotexist"), &NotePayload::new("Z", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiClientError::Server { status: 404, .. }));
    assert_eq!(err.to_string(), "Note not found");

    let err = client
        .create_note(&NotePayload::new(" ", ""))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Title is required");
}

#[tokio::test]
async fn board_workflow_against_live_server() {
    let base = spawn_server(Arc::new(InMemoryNoteTable::new())).await;
    let mut board = NoteBoard::new(client_for(&base));

    board.refresh().await.unwrap();
    assert!(board.notes().is_empty());

    let first = board
        .create(&NotePayload::new("Groceries", "Milk and eggs"))
        .await
        .unwrap();
    board
        .create(&NotePayload::new("Meeting", "Roadmap review"))
        .await
        .unwrap();
    assert_eq!(board.message(), Some("Note created"));
    assert_eq!(board.notes().len(), 2);

    board.set_search("MILK");
    let visible: Vec<_> = board.visible_notes().iter().map(|n| n.note_id.clone()).collect();
    assert_eq!(visible, vec![first.note_id.clone()]);

    // Keep the update strictly later than both creations.
    tokio::time::sleep(Duration::from_millis(5)).await;
    board
        .update(&first.note_id, &NotePayload::new("Groceries", "Bread"))
        .await
        .unwrap();
    assert_eq!(board.message(), Some("Note updated"));
    assert_eq!(board.notes()[0].note_id, first.note_id);
    assert!(board.visible_notes().is_empty());

    board.delete(&first.note_id).await.unwrap();
    assert_eq!(board.message(), Some("Note deleted"));
    assert_eq!(board.notes().len(), 1);
    assert_eq!(board.error(), None);
}

#[tokio::test]
async fn board_shows_datastore_failure() {
    let base = spawn_server(Arc::new(FailingNoteTable::new("table is gone"))).await;
    let mut board = NoteBoard::new(client_for(&base));

    let err = board.refresh().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(board.error(), Some("Scan failed: table is gone"));
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{}", addr))
        .list_notes()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiClientError::Http(_)));
}
