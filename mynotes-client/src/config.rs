//! Configuration for the My Notes client.

use mynotes_core::ConfigError;
use reqwest::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:3001";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API server (`MYNOTES_API_BASE`)
    pub api_base_url: String,
    /// Per-request timeout (`MYNOTES_TIMEOUT_MS`)
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("MYNOTES_API_BASE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base_url);

        let request_timeout_ms = match lookup("MYNOTES_TIMEOUT_MS").filter(|v| !v.trim().is_empty()) {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                ConfigError::invalid("MYNOTES_TIMEOUT_MS", &value, "must be a number of milliseconds")
            })?,
            None => defaults.request_timeout_ms,
        };

        let config = Self {
            api_base_url,
            request_timeout_ms,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            ConfigError::invalid("api_base_url", &self.api_base_url, e.to_string())
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "api_base_url",
                &self.api_base_url,
                "must be an http or https URL",
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "request_timeout_ms",
                "0",
                "must be > 0",
            ));
        }
        Ok(())
    }
}
