//! Error types and handling for the MCP server.
//!
//! Errors that stop the server from starting or serving. Failures of a
//! single tool call never end up here: they are reported to the client as
//! tool results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Startup and serving errors for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error raised while starting or running a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
