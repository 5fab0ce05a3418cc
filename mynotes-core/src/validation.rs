//! Note payload validation
//!
//! The validator accepts any JSON value and never panics: non-object
//! payloads and non-string fields are treated as absent.

use serde_json::Value;

use crate::error::ValidationError;
use crate::note::NoteContent;

/// Message reported when a payload has no usable title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Extract and trim `title` and `description` from an arbitrary payload.
///
/// # Errors
/// Returns [`ValidationError::TitleRequired`] when the trimmed title is empty.
pub fn validate_note_payload(payload: &Value) -> Result<NoteContent, ValidationError> {
    let title = string_field(payload, "title");
    let description = string_field(payload, "description");

    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }

    Ok(NoteContent {
        title: title.to_string(),
        description: description.to_string(),
    })
}

fn string_field<'a>(payload: &'a Value, field: &str) -> &'a str {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
}
