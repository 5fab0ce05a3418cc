//! Path extractor for note ids.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use mynotes_core::NoteId;

use crate::error::ApiError;

/// The `:id` segment of `/notes/:id` as a [`NoteId`].
///
/// Ids are opaque: any segment is accepted, and unknown ids are reported
/// by the operation itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePathId(pub NoteId);

#[async_trait]
impl<S> FromRequestParts<S> for NotePathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::invalid_input(format!(
                    "Invalid note id in path {}: {}",
                    parts.uri.path(),
                    e.body_text()
                ))
            })?;

        Ok(NotePathId(NoteId::from(id)))
    }
}
