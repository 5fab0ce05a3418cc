//! Note Service
//!
//! Validation and datastore calls for the four note operations.

use mynotes_core::{now, sort_by_recent_update, validate_note_payload, Note, NoteId};
use mynotes_storage::NoteTable;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Validate `payload` and store it as a new note.
///
/// The note gets a fresh id and `created_at == updated_at`. Nothing is
/// written when validation fails.
pub async fn create_note(table: &dyn NoteTable, payload: &Value) -> ApiResult<Note> {
    let content = validate_note_payload(payload)?;
    let note = Note::create(content);
    table.put(&note).await?;

    tracing::debug!(note_id = %note.note_id, "Note created");
    Ok(note)
}

/// Every note, most recently updated first.
pub async fn list_notes(table: &dyn NoteTable) -> ApiResult<Vec<Note>> {
    let mut notes = table.scan_all().await?;
    sort_by_recent_update(&mut notes);
    Ok(notes)
}

/// Validate `payload` and overwrite the content of an existing note.
///
/// # Errors
/// Returns `NoteNotFound` when `id` does not exist; no note is created.
pub async fn update_note(table: &dyn NoteTable, id: &NoteId, payload: &Value) -> ApiResult<Note> {
    let content = validate_note_payload(payload)?;

    match table.update_existing(id, &content, now()).await? {
        Some(note) => {
            tracing::debug!(note_id = %note.note_id, "Note updated");
            Ok(note)
        }
        None => {
            tracing::debug!(note_id = %id, "Update of unknown note");
            Err(ApiError::note_not_found())
        }
    }
}

/// Delete a note. Unknown ids succeed.
pub async fn delete_note(table: &dyn NoteTable, id: &NoteId) -> ApiResult<()> {
    table.delete(id).await?;
    tracing::debug!(note_id = %id, "Note deleted");
    Ok(())
}
