//! In-memory note table.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mynotes_core::{Note, NoteContent, NoteId, StorageError, StorageResult, Timestamp};

use crate::NoteTable;

/// Note table held in process memory.
///
/// Scan order is ascending by id, which keeps results deterministic.
#[derive(Debug, Default)]
pub struct InMemoryNoteTable {
    notes: RwLock<BTreeMap<NoteId, Note>>,
}

impl InMemoryNoteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-populated with `notes`.
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let map = notes
            .into_iter()
            .map(|note| (note.note_id.clone(), note))
            .collect();
        Self {
            notes: RwLock::new(map),
        }
    }

    /// Number of stored notes.
    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Fetch a single note by id.
    pub fn get(&self, id: &NoteId) -> StorageResult<Option<Note>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn read(&self) -> StorageResult<std::sync::RwLockReadGuard<'_, BTreeMap<NoteId, Note>>> {
        self.notes.read().map_err(|_| StorageError::LockPoisoned)
    }

    fn write(&self) -> StorageResult<std::sync::RwLockWriteGuard<'_, BTreeMap<NoteId, Note>>> {
        self.notes.write().map_err(|_| StorageError::LockPoisoned)
    }
}

#[async_trait]
impl NoteTable for InMemoryNoteTable {
    async fn put(&self, note: &Note) -> StorageResult<()> {
        self.write()?.insert(note.note_id.clone(), note.clone());
        Ok(())
    }

    async fn scan_all(&self) -> StorageResult<Vec<Note>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn update_existing(
        &self,
        id: &NoteId,
        content: &NoteContent,
        updated_at: Timestamp,
    ) -> StorageResult<Option<Note>> {
        let mut notes = self.write()?;
        Ok(notes.get_mut(id).map(|note| {
            note.apply_update(content.clone(), updated_at);
            note.clone()
        }))
    }

    async fn delete(&self, id: &NoteId) -> StorageResult<()> {
        self.write()?.remove(id);
        Ok(())
    }
}
