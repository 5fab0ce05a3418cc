//! Plain-text rendering of the note board for the terminal.

use std::fmt::Write;

use mynotes_core::{format_timestamp, Note};

use crate::api_client::NotesApi;
use crate::state::NoteBoard;

/// Render a list of notes, or an empty-state line.
pub fn render_notes(notes: &[&Note], search: &str) -> String {
    if notes.is_empty() {
        return if search.is_empty() {
            "No notes yet\n".to_string()
        } else {
            format!("No notes found matching \"{}\"\n", search)
        };
    }

    let mut out = String::new();
    for note in notes {
        let _ = writeln!(out, "{}  {}", note.note_id, note.title);
        if !note.description.is_empty() {
            for line in note.description.lines() {
                let _ = writeln!(out, "    {}", line);
            }
        }
        let _ = writeln!(out, "    updated {}", format_timestamp(&note.updated_at));
    }
    out
}

/// Banners followed by the visible notes.
pub fn render_board<A: NotesApi>(board: &NoteBoard<A>) -> String {
    let mut out = String::new();
    if let Some(message) = board.message() {
        let _ = writeln!(out, "{}", message);
    }
    if let Some(error) = board.error() {
        let _ = writeln!(out, "error: {}", error);
        if board.notes().is_empty() {
            return out;
        }
    }
    out.push_str(&render_notes(&board.visible_notes(), board.search()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mynotes_core::{parse_timestamp, NoteId};

    fn note(id: &str, title: &str, description: &str) -> Note {
        let ts = parse_timestamp("2024-03-01T12:00:00.000Z").unwrap();
        Note {
            note_id: NoteId::from(id),
            title: title.to_string(),
            description: description.to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_empty_states() {
        assert_eq!(render_notes(&[], ""), "No notes yet\n");
        assert_eq!(render_notes(&[], "xyz"), "No notes found matching \"xyz\"\n");
    }

    #[test]
    fn test_renders_fields() {
        let a = note("abc", "Title", "line one\nline two");
        let b = note("def", "Bare", "");
        let text = render_notes(&[&a, &b], "");

        assert_eq!(
            text,
            "abc  Title\n    line one\n    line two\n    updated 2024-03-01T12:00:00.000Z\n\
             def  Bare\n    updated 2024-03-01T12:00:00.000Z\n"
        );
    }
}
