//! Storage configuration loaded from environment variables.

use std::fmt;
use std::str::FromStr;

use mynotes_core::ConfigError;

/// Default DynamoDB table name.
pub const DEFAULT_TABLE_NAME: &str = "Notes";

/// Which note table implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    DynamoDb,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(Self::DynamoDb),
            "memory" | "in-memory" => Ok(Self::Memory),
            _ => Err(ConfigError::invalid(
                "MYNOTES_STORAGE",
                value,
                "expected 'dynamodb' or 'memory'",
            )),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DynamoDb => f.write_str("dynamodb"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// DynamoDB table settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Table name (`TABLE_NAME`)
    pub table_name: String,
    /// Region override (`AWS_REGION`); `None` uses the SDK default chain
    pub region: Option<String>,
    /// Endpoint override (`DYNAMODB_ENDPOINT`), e.g. DynamoDB Local
    pub endpoint: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            region: None,
            endpoint: None,
        }
    }
}

/// Storage settings for the API server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub table: TableConfig,
}

impl StorageConfig {
    /// Load storage settings from the process environment.
    ///
    /// Environment variables:
    /// - `MYNOTES_STORAGE`: `dynamodb` (default) or `memory`
    /// - `TABLE_NAME`: table name (default: `Notes`)
    /// - `AWS_REGION`: region override
    /// - `DYNAMODB_ENDPOINT`: endpoint override
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load storage settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match non_empty("MYNOTES_STORAGE") {
            Some(value) => value.parse()?,
            None => StorageBackend::default(),
        };

        let table_name = match lookup("TABLE_NAME") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::invalid("TABLE_NAME", &value, "must not be empty"))
            }
            Some(value) => value.trim().to_string(),
            None => DEFAULT_TABLE_NAME.to_string(),
        };

        Ok(Self {
            backend,
            table: TableConfig {
                table_name,
                region: non_empty("AWS_REGION"),
                endpoint: non_empty("DYNAMODB_ENDPOINT"),
            },
        })
    }
}
