//! Request extractors that reject with [`crate::error::ApiError`].

pub mod path_id;
pub mod payload;

pub use path_id::NotePathId;
pub use payload::JsonPayload;
