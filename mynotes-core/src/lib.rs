//! My Notes Core - Entity Types
//!
//! Pure data structures and pure functions shared by the API server, the
//! storage layer and the client. This crate performs no I/O.

pub mod envelope;
pub mod error;
pub mod identity;
pub mod note;
pub mod search;
pub mod validation;

pub use envelope::Envelope;
pub use error::{ConfigError, StorageError, StorageResult, ValidationError};
pub use identity::{format_timestamp, now, parse_timestamp, NoteId, Timestamp, NOTE_ID_LEN};
pub use note::{sort_by_recent_update, Note, NoteContent, NotePayload};
pub use search::{filter_notes, matches_search};
pub use validation::{validate_note_payload, TITLE_REQUIRED};
