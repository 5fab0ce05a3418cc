//! My Notes Client
//!
//! REST client for the notes API, the [`NoteBoard`](state::NoteBoard)
//! state model with client-side search, and plain-text rendering for the
//! `mynotes` command.

pub mod api_client;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

pub use api_client::{ApiClientError, NotesApi, NotesClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use state::NoteBoard;
