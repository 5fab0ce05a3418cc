//! Service layer for note operations.
//!
//! Handlers stay thin: they extract the request, call a service function,
//! and shape the response envelope.

pub mod note_service;

pub use note_service::{create_note, delete_note, list_notes, update_note};
