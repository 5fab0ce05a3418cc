//! DynamoDB note table.
//!
//! Items are stored with string attributes `NoteId` (partition key),
//! `title`, `description`, `createdAt` and `updatedAt`. Scanned items that
//! do not decode are logged and left out of the list.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use mynotes_core::{
    format_timestamp, parse_timestamp, Note, NoteContent, NoteId, StorageError, StorageResult,
    Timestamp,
};

use crate::config::TableConfig;
use crate::NoteTable;

/// Partition key attribute.
pub const KEY_ATTRIBUTE: &str = "NoteId";

const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

type Item = HashMap<String, AttributeValue>;

/// Note table backed by a DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoNoteTable {
    client: Client,
    table_name: String,
}

impl DynamoNoteTable {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Build a client from the default AWS credential chain, applying the
    /// configured region and endpoint override.
    pub async fn from_config(config: &TableConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.as_str());
        }
        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl NoteTable for DynamoNoteTable {
    async fn put(&self, note: &Note) -> StorageResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(note_to_item(note)))
            .send()
            .await
            .map_err(|err| backend_error("PutItem", err))?;
        Ok(())
    }

    async fn scan_all(&self) -> StorageResult<Vec<Note>> {
        let mut notes = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|err| backend_error("Scan", err))?;

            notes.extend(decode_scanned(&self.table_name, output.items()));

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        Ok(notes)
    }

    async fn update_existing(
        &self,
        id: &NoteId,
        content: &NoteContent,
        updated_at: Timestamp,
    ) -> StorageResult<Option<Note>> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .update_expression("SET #t = :t, #d = :d, #u = :u")
            .condition_expression("attribute_exists(#k)")
            .expression_attribute_names("#k", KEY_ATTRIBUTE)
            .expression_attribute_names("#t", TITLE)
            .expression_attribute_names("#d", DESCRIPTION)
            .expression_attribute_names("#u", UPDATED_AT)
            .expression_attribute_values(":t", AttributeValue::S(content.title.clone()))
            .expression_attribute_values(":d", AttributeValue::S(content.description.clone()))
            .expression_attribute_values(":u", AttributeValue::S(format_timestamp(&updated_at)))
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => output.attributes().map(item_to_note).transpose(),
            Err(err) => classify_update_error(err),
        }
    }

    async fn delete(&self, id: &NoteId) -> StorageResult<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|err| backend_error("DeleteItem", err))?;
        Ok(())
    }
}

/// A failed `attribute_exists` condition means no note has the id.
fn classify_update_error<R>(err: SdkError<UpdateItemError, R>) -> StorageResult<Option<Note>>
where
    R: fmt::Debug,
{
    if err
        .as_service_error()
        .is_some_and(|e| e.is_conditional_check_failed_exception())
    {
        Ok(None)
    } else {
        Err(backend_error("UpdateItem", err))
    }
}

fn backend_error<E>(operation: &'static str, err: E) -> StorageError
where
    E: std::error::Error,
{
    let reason = DisplayErrorContext(&err).to_string();
    tracing::error!(operation, %reason, "DynamoDB request failed");
    StorageError::Backend { operation, reason }
}

// ============================================================================
// ITEM CODEC
// ============================================================================

/// Encode a note as a DynamoDB item.
pub fn note_to_item(note: &Note) -> Item {
    HashMap::from([
        (
            KEY_ATTRIBUTE.to_string(),
            AttributeValue::S(note.note_id.to_string()),
        ),
        (TITLE.to_string(), AttributeValue::S(note.title.clone())),
        (
            DESCRIPTION.to_string(),
            AttributeValue::S(note.description.clone()),
        ),
        (
            CREATED_AT.to_string(),
            AttributeValue::S(format_timestamp(&note.created_at)),
        ),
        (
            UPDATED_AT.to_string(),
            AttributeValue::S(format_timestamp(&note.updated_at)),
        ),
    ])
}

/// Decode a page of scanned items, skipping any that are malformed.
fn decode_scanned(table: &str, items: &[Item]) -> Vec<Note> {
    items
        .iter()
        .filter_map(|item| match item_to_note(item) {
            Ok(note) => Some(note),
            Err(err) => {
                let key = item.get(KEY_ATTRIBUTE).and_then(|v| v.as_s().ok());
                tracing::warn!(table, note_id = ?key, error = %err, "Skipping malformed note item");
                None
            }
        })
        .collect()
}

/// Decode a DynamoDB item into a note.
///
/// A missing `description` decodes as empty; any other missing or
/// non-string attribute is a [`StorageError::MalformedItem`].
pub fn item_to_note(item: &Item) -> StorageResult<Note> {
    Ok(Note {
        note_id: NoteId::from(required_string(item, KEY_ATTRIBUTE)?),
        title: required_string(item, TITLE)?.to_string(),
        description: optional_string(item, DESCRIPTION)?
            .unwrap_or_default()
            .to_string(),
        created_at: required_timestamp(item, CREATED_AT)?,
        updated_at: required_timestamp(item, UPDATED_AT)?,
    })
}

fn optional_string<'a>(item: &'a Item, name: &str) -> StorageResult<Option<&'a str>> {
    match item.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_s()
            .map(|s| Some(s.as_str()))
            .map_err(|_| StorageError::MalformedItem {
                reason: format!("attribute '{}' is not a string", name),
            }),
    }
}

fn required_string<'a>(item: &'a Item, name: &str) -> StorageResult<&'a str> {
    optional_string(item, name)?.ok_or_else(|| StorageError::MalformedItem {
        reason: format!("missing attribute '{}'", name),
    })
}

fn required_timestamp(item: &Item, name: &str) -> StorageResult<Timestamp> {
    let raw = required_string(item, name)?;
    parse_timestamp(raw).map_err(|e| StorageError::MalformedItem {
        reason: format!("attribute '{}' is not a timestamp ({}): {}", name, raw, e),
    })
}
