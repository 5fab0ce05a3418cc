//! Note REST API Routes
//!
//! Axum handlers for the note CRUD endpoints. Each handler delegates to
//! [`crate::services::note_service`] and wraps the result in an envelope.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use mynotes_core::Envelope;
use mynotes_storage::NoteTable;
use std::sync::Arc;

use crate::{
    error::ApiResult,
    extractors::{JsonPayload, NotePathId},
    services::note_service,
};

pub const NOTE_CREATED: &str = "Note created";
pub const NOTE_UPDATED: &str = "Note updated";
pub const NOTE_DELETED: &str = "Note deleted";

// ============================================================================
// SHARED STATE
// ============================================================================

/// Shared application state for note routes.
#[derive(Clone)]
pub struct NoteState {
    pub table: Arc<dyn NoteTable>,
}

impl NoteState {
    pub fn new(table: Arc<dyn NoteTable>) -> Self {
        Self { table }
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /notes - Create a new note
pub async fn create_note(
    State(state): State<Arc<NoteState>>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<impl IntoResponse> {
    let note = note_service::create_note(state.table.as_ref(), &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::data_with_message(note, NOTE_CREATED)),
    ))
}

/// GET /notes - List all notes, most recently updated first
pub async fn list_notes(State(state): State<Arc<NoteState>>) -> ApiResult<impl IntoResponse> {
    let notes = note_service::list_notes(state.table.as_ref()).await?;
    Ok(Json(Envelope::data(notes)))
}

/// PUT /notes/:id - Replace a note's title and description
pub async fn update_note(
    State(state): State<Arc<NoteState>>,
    NotePathId(id): NotePathId,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<impl IntoResponse> {
    let note = note_service::update_note(state.table.as_ref(), &id, &payload).await?;
    Ok(Json(Envelope::data_with_message(note, NOTE_UPDATED)))
}

/// DELETE /notes/:id - Delete a note
pub async fn delete_note(
    State(state): State<Arc<NoteState>>,
    NotePathId(id): NotePathId,
) -> ApiResult<impl IntoResponse> {
    note_service::delete_note(state.table.as_ref(), &id).await?;
    Ok(Json(Envelope::<()>::message(NOTE_DELETED)))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the note routes router.
pub fn create_router(table: Arc<dyn NoteTable>) -> Router {
    let state = Arc::new(NoteState::new(table));

    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/:id", put(update_note).delete(delete_note))
        .with_state(state)
}
