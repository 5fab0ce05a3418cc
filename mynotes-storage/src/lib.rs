//! My Notes Storage - Note Table Trait and Backends
//!
//! Defines the datastore abstraction the API layer talks to. The production
//! backend is a DynamoDB table keyed by `NoteId`; the in-memory backend is
//! used for local development and tests.

pub mod config;
pub mod dynamo;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use mynotes_core::{Note, NoteContent, NoteId, StorageResult, Timestamp};

pub use config::{StorageBackend, StorageConfig, TableConfig};
pub use dynamo::DynamoNoteTable;
pub use memory::InMemoryNoteTable;

// ============================================================================
// NOTE TABLE TRAIT
// ============================================================================

/// Single-item operations over the notes table.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait NoteTable: Send + Sync {
    /// Write a full note unconditionally, replacing any item with the same id.
    async fn put(&self, note: &Note) -> StorageResult<()>;

    /// Return every note in the table, in the backend's scan order.
    async fn scan_all(&self) -> StorageResult<Vec<Note>>;

    /// Overwrite title, description and `updated_at` of an existing note.
    ///
    /// Returns the post-update note, or `None` when no note has this id.
    /// Never creates a note.
    async fn update_existing(
        &self,
        id: &NoteId,
        content: &NoteContent,
        updated_at: Timestamp,
    ) -> StorageResult<Option<Note>>;

    /// Delete a note. Deleting a missing id succeeds.
    async fn delete(&self, id: &NoteId) -> StorageResult<()>;
}

/// Build the note table selected by `config`.
pub async fn connect(config: &StorageConfig) -> Arc<dyn NoteTable> {
    match config.backend {
        StorageBackend::DynamoDb => {
            tracing::info!(
                table = %config.table.table_name,
                region = ?config.table.region,
                endpoint = ?config.table.endpoint,
                "Using DynamoDB note table"
            );
            Arc::new(DynamoNoteTable::from_config(&config.table).await)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory note table; notes are lost on restart");
            Arc::new(InMemoryNoteTable::new())
        }
    }
}
