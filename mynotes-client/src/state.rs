//! Note board state: the client-side model behind the notes screen.
//!
//! The board owns the fetched list, the loading flag, the success and error
//! banners, and the search term. Every successful mutation re-fetches the
//! whole list; nothing is patched locally.

use mynotes_core::{filter_notes, Note, NoteId, NotePayload, ValidationError};

use crate::api_client::{ApiClientError, NotesApi};

pub const NOTE_CREATED: &str = "Note created";
pub const NOTE_UPDATED: &str = "Note updated";
pub const NOTE_DELETED: &str = "Note deleted";

#[derive(Debug)]
pub struct NoteBoard<A> {
    api: A,
    notes: Vec<Note>,
    loading: bool,
    error: Option<String>,
    message: Option<String>,
    search: String,
}

impl<A: NotesApi> NoteBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            notes: Vec::new(),
            loading: false,
            error: None,
            message: None,
            search: String::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Notes as last fetched, in server order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.note_id == id)
    }

    /// Change the search term. Never contacts the server.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Notes matching the current search term, in list order.
    pub fn visible_notes(&self) -> Vec<&Note> {
        filter_notes(&self.notes, &self.search)
    }

    /// Re-fetch the full list.
    ///
    /// Clears the error banner first. On failure the previous list is kept
    /// and the error banner is set.
    pub async fn refresh(&mut self) -> Result<(), ApiClientError> {
        self.loading = true;
        self.error = None;

        let result = self.api.list_notes().await;
        self.loading = false;

        match result {
            Ok(notes) => {
                self.notes = notes;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load notes");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn create(&mut self, payload: &NotePayload) -> Result<Note, ApiClientError> {
        let result = match require_title(payload) {
            Ok(()) => self.api.create_note(payload).await,
            Err(err) => Err(err),
        };
        self.finish_mutation(result, NOTE_CREATED).await
    }

    pub async fn update(&mut self, id: &NoteId, payload: &NotePayload) -> Result<Note, ApiClientError> {
        let result = match require_title(payload) {
            Ok(()) => self.api.update_note(id, payload).await,
            Err(err) => Err(err),
        };
        self.finish_mutation(result, NOTE_UPDATED).await
    }

    /// Update a note, keeping its current description when none is given.
    ///
    /// Without a description the list is re-fetched first. If that fetch
    /// fails, or the note is not in it, nothing is sent.
    pub async fn edit(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Note, ApiClientError> {
        let description = match description {
            Some(description) => description,
            None => {
                self.refresh().await?;
                match self.find(id) {
                    Some(note) => note.description.clone(),
                    None => {
                        let err = ApiClientError::NoteNotFound(id.clone());
                        self.error = Some(err.to_string());
                        return Err(err);
                    }
                }
            }
        };
        self.update(id, &NotePayload::new(title, description)).await
    }

    pub async fn delete(&mut self, id: &NoteId) -> Result<(), ApiClientError> {
        let result = self.api.delete_note(id).await;
        self.finish_mutation(result, NOTE_DELETED).await
    }

    /// Set the banners for a finished mutation and re-fetch on success.
    ///
    /// A failed re-fetch after a successful mutation still returns `Ok`;
    /// the failure shows up in the error banner.
    async fn finish_mutation<T>(
        &mut self,
        result: Result<T, ApiClientError>,
        banner: &str,
    ) -> Result<T, ApiClientError> {
        match result {
            Ok(value) => {
                self.message = Some(banner.to_string());
                // Failure is recorded in the error banner.
                let _ = self.refresh().await;
                Ok(value)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

fn require_title(payload: &NotePayload) -> Result<(), ApiClientError> {
    if payload.title.trim().is_empty() {
        Err(ValidationError::TitleRequired.into())
    } else {
        Ok(())
    }
}
