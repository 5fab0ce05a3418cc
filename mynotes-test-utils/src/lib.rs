//! My Notes Test Utilities
//!
//! Shared test infrastructure for the workspace:
//! - Proptest generators for note fields and payloads
//! - Note table doubles for failure paths
//! - Fixtures for common scenarios
//! - Assertions for list ordering

pub use mynotes_core::{Note, NoteContent, NoteId, StorageError, StorageResult, Timestamp};
pub use mynotes_storage::{InMemoryNoteTable, NoteTable};

use async_trait::async_trait;

// ============================================================================
// NOTE TABLE DOUBLES
// ============================================================================

/// Note table whose every operation fails with a backend error.
#[derive(Debug, Clone)]
pub struct FailingNoteTable {
    reason: String,
}

impl FailingNoteTable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self, operation: &'static str) -> StorageResult<T> {
        Err(StorageError::Backend {
            operation,
            reason: self.reason.clone(),
        })
    }
}

impl Default for FailingNoteTable {
    fn default() -> Self {
        Self::new("ResourceNotFoundException: table does not exist")
    }
}

#[async_trait]
impl NoteTable for FailingNoteTable {
    async fn put(&self, _note: &Note) -> StorageResult<()> {
        self.fail("PutItem")
    }

    async fn scan_all(&self) -> StorageResult<Vec<Note>> {
        self.fail("Scan")
    }

    async fn update_existing(
        &self,
        _id: &NoteId,
        _content: &NoteContent,
        _updated_at: Timestamp,
    ) -> StorageResult<Option<Note>> {
        self.fail("UpdateItem")
    }

    async fn delete(&self, _id: &NoteId) -> StorageResult<()> {
        self.fail("DeleteItem")
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for note fields.

    use super::*;
    use proptest::prelude::*;

    /// A title with at least one non-whitespace character, possibly padded.
    pub fn arb_valid_title() -> impl Strategy<Value = String> {
        ("[ \t]{0,3}", "[A-Za-z0-9][A-Za-z0-9 .,!?'-]{0,40}", "[ \t\n]{0,3}")
            .prop_map(|(lead, body, tail)| format!("{}{}{}", lead, body, tail))
    }

    /// A title that is empty after trimming.
    pub fn arb_blank_title() -> impl Strategy<Value = String> {
        "[ \t\r\n]{0,8}"
    }

    /// Any description, including empty and whitespace-only ones.
    pub fn arb_description() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[ ]{0,2}[A-Za-z0-9 .,]{0,80}[ ]{0,2}"]
    }

    /// A JSON value that is not a string, for fields sent with the wrong type.
    pub fn arb_non_string_json() -> impl Strategy<Value = serde_json::Value> {
        prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::from),
            any::<i64>().prop_map(serde_json::Value::from),
            Just(serde_json::json!(["title"])),
            Just(serde_json::json!({"title": "nested"})),
        ]
    }

    /// A timestamp between 2020 and 2030 with millisecond precision.
    pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
        (1_577_836_800_000i64..1_893_456_000_000i64).prop_map(|millis| {
            chrono::DateTime::from_timestamp_millis(millis).unwrap_or_else(mynotes_core::now)
        })
    }

    /// A note whose `updated_at` is never earlier than its `created_at`.
    pub fn arb_note() -> impl Strategy<Value = Note> {
        (
            arb_valid_title(),
            arb_description(),
            arb_timestamp(),
            0i64..10_000_000,
        )
            .prop_map(|(title, description, created_at, age_ms)| {
                let content = NoteContent {
                    title: title.trim().to_string(),
                    description: description.trim().to_string(),
                };
                let mut note = Note::new(NoteId::generate(), content.clone(), created_at);
                note.apply_update(content, created_at + chrono::Duration::milliseconds(age_ms));
                note
            })
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built notes and tables.

    use super::*;

    /// Parse a fixture timestamp, e.g. `"2024-01-01T00:00:00.000Z"`.
    ///
    /// # Panics
    /// Panics on an invalid literal.
    #[track_caller]
    pub fn ts(value: &str) -> Timestamp {
        mynotes_core::parse_timestamp(value)
            .unwrap_or_else(|e| panic!("invalid fixture timestamp {}: {}", value, e))
    }

    /// A note with fixed id, content and timestamps.
    pub fn note_at(id: &str, title: &str, description: &str, created_at: &str, updated_at: &str) -> Note {
        Note {
            note_id: NoteId::from(id),
            title: title.to_string(),
            description: description.to_string(),
            created_at: ts(created_at),
            updated_at: ts(updated_at),
        }
    }

    /// Three notes with distinct update times, in ascending update order.
    pub fn sample_notes() -> Vec<Note> {
        vec![
            note_at(
                "note-oldest",
                "Groceries",
                "Milk, eggs and bread",
                "2024-01-01T09:00:00.000Z",
                "2024-01-01T09:00:00.000Z",
            ),
            note_at(
                "note-middle",
                "Meeting notes",
                "Discuss the Q3 roadmap",
                "2024-01-02T10:00:00.000Z",
                "2024-01-03T10:00:00.000Z",
            ),
            note_at(
                "note-newest",
                "Reading list",
                "",
                "2024-01-04T08:30:00.000Z",
                "2024-01-05T08:30:00.000Z",
            ),
        ]
    }

    /// In-memory table seeded with [`sample_notes`].
    pub fn seeded_table() -> InMemoryNoteTable {
        InMemoryNoteTable::with_notes(sample_notes())
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions for note collections.

    use super::*;

    /// Assert that notes are ordered by `updated_at`, most recent first.
    #[track_caller]
    pub fn assert_sorted_by_recent_update(notes: &[Note]) {
        for pair in notes.windows(2) {
            assert!(
                pair[0].updated_at >= pair[1].updated_at,
                "notes out of order: {} ({}) before {} ({})",
                pair[0].note_id,
                pair[0].updated_at,
                pair[1].note_id,
                pair[1].updated_at,
            );
        }
    }

    /// Assert that no note in `notes` has the given id.
    #[track_caller]
    pub fn assert_absent(notes: &[Note], id: &NoteId) {
        assert!(
            notes.iter().all(|n| &n.note_id != id),
            "note {} unexpectedly present",
            id
        );
    }
}
