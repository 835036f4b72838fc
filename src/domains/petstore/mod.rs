//! Petstore domain module.
//!
//! This module talks to the two Petstore backends on behalf of the tools:
//! - `auth_client.rs` - logs in against the auth service and returns a token
//! - `core_client.rs` - pet create/list/search against the core data service
//! - `service.rs` - the adapter used by tools (validate, authenticate, call)
//! - `models.rs` - pet records, drafts and tokens
//! - `error.rs` - Petstore error taxonomy
//!
//! Every tool call obtains a fresh token. Nothing is cached between calls.

mod auth_client;
mod core_client;
mod error;
mod models;
mod service;

use std::time::Duration;

pub use auth_client::{AuthClient, TokenProvider};
pub use core_client::{CoreClient, PetBackend};
pub use error::{PetstoreError, PetstoreResult};
pub use models::{Pet, PetDraft, Token};
pub use service::PetService;

#[cfg(test)]
pub(crate) use service::tests as testing;

/// Header carrying the token on every core service request.
pub const TOKEN_HEADER: &str = "token";

/// Build the shared HTTP client used by both backend clients.
///
/// The timeout applies to each request as a whole.
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Describe a request that never produced a response.
fn transport_failure(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}
