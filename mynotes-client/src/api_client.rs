//! REST client for the My Notes API.

use std::time::Duration;

use async_trait::async_trait;
use mynotes_core::{Envelope, Note, NoteId, NotePayload, ValidationError};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;

/// Message used when a failed envelope carries none.
pub const GENERIC_FAILURE: &str = "Failed";

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with `success: false` or a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The note is absent from the freshly fetched list.
    #[error("Note not found")]
    NoteNotFound(NoteId),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl ApiClientError {
    /// HTTP status reported by the server, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// ============================================================================
// NOTES API TRAIT
// ============================================================================

/// Operations the note board needs from the backend.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiClientError>;

    async fn create_note(&self, payload: &NotePayload) -> Result<Note, ApiClientError>;

    async fn update_note(&self, id: &NoteId, payload: &NotePayload) -> Result<Note, ApiClientError>;

    async fn delete_note(&self, id: &NoteId) -> Result<(), ApiClientError>;
}

// ============================================================================
// REST CLIENT
// ============================================================================

#[derive(Debug, Clone)]
pub struct NotesClient {
    client: reqwest::Client,
    base_url: Url,
}

impl NotesClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base = config.api_base_url.trim_end_matches('/');
        let base_url = Url::parse(base)
            .map_err(|e| ApiClientError::Config(format!("invalid API base URL {}: {}", base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiClientError::Config(format!(
                "API base URL {} cannot be a base",
                base
            )));
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /health`; returns the server's message.
    pub async fn health(&self) -> Result<String, ApiClientError> {
        let url = self.url(&["health"])?;
        let envelope: Envelope<serde_json::Value> = self.send(self.client.get(url)).await?;
        Ok(envelope.message.unwrap_or_default())
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiClientError::Config(format!("API base URL {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and unwrap the response envelope.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ApiClientError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str::<Envelope<T>>(&text) {
            Ok(envelope) if envelope.success && status.is_success() => Ok(envelope),
            Ok(envelope) => Err(ApiClientError::Server {
                status: status.as_u16(),
                message: envelope
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            }),
            Err(_) if !status.is_success() => Err(ApiClientError::Server {
                status: status.as_u16(),
                message: format!("Request failed with status code {}", status.as_u16()),
            }),
            Err(e) => Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}: {}",
                status.as_u16(),
                e,
                text
            ))),
        }
    }
}

#[async_trait]
impl NotesApi for NotesClient {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiClientError> {
        let url = self.url(&["notes"])?;
        let envelope: Envelope<Vec<Note>> = self.send(self.client.get(url)).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn create_note(&self, payload: &NotePayload) -> Result<Note, ApiClientError> {
        let url = self.url(&["notes"])?;
        let envelope: Envelope<Note> = self.send(self.client.post(url).json(payload)).await?;
        envelope
            .data
            .ok_or_else(|| ApiClientError::InvalidResponse("create returned no note".to_string()))
    }

    async fn update_note(&self, id: &NoteId, payload: &NotePayload) -> Result<Note, ApiClientError> {
        let url = self.url(&["notes", id.as_str()])?;
        let envelope: Envelope<Note> = self.send(self.client.put(url).json(payload)).await?;
        envelope
            .data
            .ok_or_else(|| ApiClientError::InvalidResponse("update returned no note".to_string()))
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), ApiClientError> {
        let url = self.url(&["notes", id.as_str()])?;
        let _: Envelope<serde_json::Value> = self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
