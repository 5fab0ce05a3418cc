//! The note entity and its wire shape

use serde::{Deserialize, Serialize};

use crate::identity::{now, NoteId, Timestamp};

/// Validated, trimmed note fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteContent {
    /// Non-empty trimmed title
    pub title: String,
    /// Trimmed description, possibly empty
    pub description: String,
}

/// Body of a create or update request as sent by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NotePayload {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A stored note in API shape: `{noteId, title, description, createdAt, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: NoteId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "crate::identity::timestamp_format")]
    pub created_at: Timestamp,
    #[serde(with = "crate::identity::timestamp_format")]
    pub updated_at: Timestamp,
}

impl Note {
    /// Build a note with an explicit id and creation time.
    pub fn new(note_id: NoteId, content: NoteContent, created_at: Timestamp) -> Self {
        Self {
            note_id,
            title: content.title,
            description: content.description,
            created_at,
            updated_at: created_at,
        }
    }

    /// Create a brand-new note with a generated id, stamped with the current time.
    pub fn create(content: NoteContent) -> Self {
        Self::new(NoteId::generate(), content, now())
    }

    /// Overwrite title and description and refresh `updated_at`.
    ///
    /// `note_id` and `created_at` are never touched; `updated_at` never
    /// drops below `created_at`.
    pub fn apply_update(&mut self, content: NoteContent, updated_at: Timestamp) {
        self.title = content.title;
        self.description = content.description;
        self.updated_at = updated_at.max(self.created_at);
    }
}

/// Sort notes most recently updated first.
///
/// The sort is stable: notes with equal `updated_at` keep their input order.
pub fn sort_by_recent_update(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
