//! Client-side note search.
//!
//! Case-insensitive substring match over title and description of an
//! already-fetched list. Never touches the backend.

use crate::note::Note;

/// Whether `note` matches `term`. An empty term matches everything.
pub fn matches_search(note: &Note, term: &str) -> bool {
    let needle = term.to_lowercase();
    note.title.to_lowercase().contains(&needle)
        || note.description.to_lowercase().contains(&needle)
}

/// Notes matching `term`, in input order.
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    notes.iter().filter(|note| matches_search(note, term)).collect()
}
