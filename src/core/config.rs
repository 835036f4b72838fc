//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults. The Petstore section is
//! immutable once the server is built and is shared by both backend clients.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default auth service address.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:3000";

/// Default core service address.
pub const DEFAULT_CORE_URL: &str = "http://localhost:3001";

/// Default per-request timeout for backend calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Petstore backends configuration.
    pub petstore: PetstoreConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Addresses, credentials and limits for the Petstore backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetstoreConfig {
    /// Base URL of the auth service (no trailing slash).
    pub auth_url: String,

    /// Base URL of the core data service (no trailing slash).
    pub core_url: String,

    /// Login credentials sent to the auth service.
    pub credentials: CredentialsConfig,

    /// Timeout applied to every backend request.
    pub request_timeout_secs: u64,
}

/// Fixed login credentials for the auth service.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub user: String,
    pub pass: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("user", &self.user)
            .field("pass", &"[REDACTED]")
            .finish()
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            user: "admin".to_string(),
            pass: "admin".to_string(),
        }
    }
}

impl Default for PetstoreConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            core_url: DEFAULT_CORE_URL.to_string(),
            credentials: CredentialsConfig::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "petstore-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            petstore: PetstoreConfig::default(),
        }
    }
}

impl PetstoreConfig {
    /// Load the Petstore section from environment variables.
    ///
    /// Each service is located either by a full URL (`PETSTORE_AUTH_URL`,
    /// `PETSTORE_CORE_URL`) or by host and port (`PETSTORE_AUTH_HOST` /
    /// `PETSTORE_AUTH_PORT`, and the same for `CORE`).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = service_url_from_env("AUTH", 3000) {
            config.auth_url = url;
        }
        if let Some(url) = service_url_from_env("CORE", 3001) {
            config.core_url = url;
        }

        if let Ok(user) = std::env::var("PETSTORE_USER") {
            config.credentials.user = user;
        }
        if let Ok(pass) = std::env::var("PETSTORE_PASS") {
            config.credentials.pass = pass;
        } else {
            warn!("PETSTORE_PASS not set - using the default Petstore credentials");
        }

        if let Ok(timeout) = std::env::var("PETSTORE_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid PETSTORE_TIMEOUT_SECS '{}', using {}s",
                    timeout, config.request_timeout_secs
                ),
            }
        }

        info!(
            "Petstore backends: auth={} core={}",
            config.auth_url, config.core_url
        );

        config
    }
}

/// Resolve `PETSTORE_<SERVICE>_URL`, falling back to host/port variables.
fn service_url_from_env(service: &str, default_port: u16) -> Option<String> {
    if let Ok(url) = std::env::var(format!("PETSTORE_{}_URL", service)) {
        return Some(normalize_base_url(&url));
    }

    let host = std::env::var(format!("PETSTORE_{}_HOST", service)).ok();
    let port = std::env::var(format!("PETSTORE_{}_PORT", service)).ok();
    if host.is_none() && port.is_none() {
        return None;
    }

    Some(format!(
        "http://{}:{}",
        host.as_deref().unwrap_or("localhost"),
        port.unwrap_or_else(|| default_port.to_string())
    ))
}

/// Strip trailing slashes so paths can be appended directly.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server variables are prefixed with `MCP_` (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`...), backend variables with
    /// `PETSTORE_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.petstore = PetstoreConfig::from_env();

        config
    }
}
