//! Transport configuration types.
//!
//! The transport is picked with `MCP_TRANSPORT` (`stdio`, `tcp`, `http`).
//! Unknown or unset values fall back to the first enabled transport.

use serde::{Deserialize, Serialize};

/// Default TCP port. Kept clear of the Petstore auth (3000) and core (3001)
/// default ports.
#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3100;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(feature = "http")]
const DEFAULT_RPC_PATH: &str = "/mcp";

#[cfg(any(feature = "tcp", feature = "http"))]
const DEFAULT_HOST: &str = "127.0.0.1";

/// Selected transport and its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport, one MCP session per connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub port: u16,
    pub host: String,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub port: u16,
    pub host: String,

    /// Path of the JSON-RPC endpoint.
    pub rpc_path: String,

    /// Allow any origin, for browser clients.
    pub enable_cors: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    fn from_lookup(var: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parse_port(var("MCP_TCP_PORT"), defaults.port),
            host: var("MCP_TCP_HOST").unwrap_or(defaults.host),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: DEFAULT_HOST.to_string(),
            rpc_path: DEFAULT_RPC_PATH.to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn from_lookup(var: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parse_port(var("MCP_HTTP_PORT"), defaults.port),
            host: var("MCP_HTTP_HOST").unwrap_or(defaults.host),
            rpc_path: var("MCP_HTTP_PATH").unwrap_or(defaults.rpc_path),
            enable_cors: var("MCP_HTTP_CORS")
                .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0"))
                .unwrap_or(defaults.enable_cors),
        }
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn parse_port(value: Option<String>, default: u16) -> u16 {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid port '{}', using {}", raw, default);
            default
        }),
        None => default,
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    fn from_lookup(var: &impl Fn(&str) -> Option<String>) -> Self {
        let transport = var("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_lookup(var)),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_lookup(var)),
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::from_lookup(&lookup(&[]));
        assert!(matches!(config, TransportConfig::Stdio));
        assert_eq!(config.description(), "STDIO (standard MCP mode)");
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unknown_transport_falls_back() {
        let vars = lookup(&[("MCP_TRANSPORT", "carrier-pigeon")]);
        let config = TransportConfig::from_lookup(&vars);
        assert!(matches!(config, TransportConfig::Stdio));
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_vars() {
        let config = TransportConfig::from_lookup(&lookup(&[
            ("MCP_TRANSPORT", "TCP"),
            ("MCP_TCP_PORT", "4100"),
        ]));
        assert_eq!(config.description(), "TCP on 127.0.0.1:4100");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_invalid_port_uses_default() {
        let config = TcpConfig::from_lookup(&lookup(&[("MCP_TCP_PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_TCP_PORT);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rpc_path, "/mcp");
        assert!(config.enable_cors);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_from_vars() {
        let config = HttpConfig::from_lookup(&lookup(&[
            ("MCP_HTTP_HOST", "0.0.0.0"),
            ("MCP_HTTP_PATH", "/rpc"),
            ("MCP_HTTP_CORS", "False"),
        ]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rpc_path, "/rpc");
        assert!(!config.enable_cors);
    }
}
