//! Petstore-specific error types.

use thiserror::Error;

/// Result type for Petstore operations.
pub type PetstoreResult<T> = Result<T, PetstoreError>;

/// Errors that can occur while serving a Petstore tool call.
#[derive(Debug, Error)]
pub enum PetstoreError {
    /// Tool arguments failed validation. No request was sent.
    #[error("Invalid tool input: {0}")]
    InvalidToolInput(String),

    /// The auth service could not be reached or did not answer in time.
    #[error("Auth service unavailable: {0}")]
    AuthUnavailable(String),

    /// The auth service refused the login or answered with an unusable body.
    #[error("Auth service rejected login: {0}")]
    AuthRejected(String),

    /// The core data service failed, refused the request, or answered with
    /// an unexpected body.
    #[error("Data service error: {0}")]
    DataService(String),
}

impl PetstoreError {
    /// Create a new "invalid tool input" error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidToolInput(msg.into())
    }

    /// Create a new "auth unavailable" error.
    pub fn auth_unavailable(msg: impl Into<String>) -> Self {
        Self::AuthUnavailable(msg.into())
    }

    /// Create a new "auth rejected" error.
    pub fn auth_rejected(msg: impl Into<String>) -> Self {
        Self::AuthRejected(msg.into())
    }

    /// Create a new "data service" error.
    pub fn data_service(msg: impl Into<String>) -> Self {
        Self::DataService(msg.into())
    }

    /// Stable machine-readable kind, reported to tool callers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidToolInput(_) => "invalid_tool_input",
            Self::AuthUnavailable(_) => "auth_unavailable",
            Self::AuthRejected(_) => "auth_rejected",
            Self::DataService(_) => "data_service_error",
        }
    }

    /// Whether the failure happened while obtaining a token.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthUnavailable(_) | Self::AuthRejected(_))
    }
}
