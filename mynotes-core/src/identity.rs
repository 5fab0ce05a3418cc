//! Identity and timestamp types for notes

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type using UTC timezone, millisecond precision.
pub type Timestamp = DateTime<Utc>;

/// Number of characters in a generated note identifier.
pub const NOTE_ID_LEN: usize = 12;

/// URL-safe alphabet used for note identifiers (64 symbols).
const NOTE_ID_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Opaque note identifier, also the datastore partition key.
///
/// Identifiers arriving from clients (path segments, stored items) are
/// accepted verbatim; only [`NoteId::generate`] guarantees the 12-character
/// URL-safe shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generate a fresh random identifier (72 bits of entropy).
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id = (0..NOTE_ID_LEN)
            .map(|_| NOTE_ID_ALPHABET[rng.random_range(0..NOTE_ID_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Current time truncated to milliseconds, the precision notes are stored with.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

/// Format a timestamp as ISO-8601 with millisecond precision and a `Z` suffix.
///
/// Every stored timestamp uses this exact shape, so string order and
/// chronological order agree.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter for [`Timestamp`] fields in the wire format.
pub mod timestamp_format {
    use super::{format_timestamp, parse_timestamp, Timestamp};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
