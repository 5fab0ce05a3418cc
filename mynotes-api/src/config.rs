//! API Configuration Module
//!
//! Listen address, CORS policy and storage settings. Configuration is loaded
//! from environment variables with defaults suited to local development.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use mynotes_core::ConfigError;
use mynotes_storage::StorageConfig;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3001;

/// Default allowed CORS origin (the development UI).
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Origin entry that allows any origin.
pub const ANY_ORIGIN: &str = "*";

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen host (`MYNOTES_BIND`).
    pub bind_host: IpAddr,

    /// Listen port (`PORT`).
    pub port: u16,

    /// Allowed CORS origins (`CORS_ORIGIN`, comma-separated).
    /// A `*` entry allows any origin.
    pub cors_origins: Vec<String>,

    /// Datastore settings.
    pub storage: StorageConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            storage: StorageConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: listen port (default: 3001)
    /// - `MYNOTES_BIND`: listen host (default: 0.0.0.0)
    /// - `CORS_ORIGIN`: comma-separated allowed origins (default: http://localhost:5173)
    /// - storage variables, see [`StorageConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create ApiConfig through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid("PORT", &value, "must be a port number"))?,
            None => defaults.port,
        };

        let bind_host = match lookup("MYNOTES_BIND").filter(|v| !v.trim().is_empty()) {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::invalid("MYNOTES_BIND", &value, "must be an IP address"))?,
            None => defaults.bind_host,
        };

        let cors_origins = lookup("CORS_ORIGIN")
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_origins);

        let config = Self {
            bind_host,
            port,
            cors_origins,
            storage: StorageConfig::from_lookup(&lookup)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse individually but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for origin in &self.cors_origins {
            if origin != ANY_ORIGIN && HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::invalid(
                    "CORS_ORIGIN",
                    origin,
                    "not a valid header value",
                ));
            }
        }
        Ok(())
    }

    /// Address the server listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    /// Whether any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}
