//! Auth service client.
//!
//! Logs in with the configured credentials and hands back the issued token.
//! There is no token cache: each call performs a fresh login.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::error::{PetstoreError, PetstoreResult};
use super::models::Token;
use super::transport_failure;
use crate::core::config::CredentialsConfig;

/// Source of tokens for core service calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Obtain a new token. Each call is a separate login.
    async fn fetch_token(&self) -> PetstoreResult<Token>;
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    user: &'a str,
    pass: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// HTTP client for the Petstore auth service.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialsConfig,
}

impl AuthClient {
    /// Login endpoint, relative to the auth service base URL.
    pub const LOGIN_PATH: &'static str = "/auth/login";

    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        credentials: CredentialsConfig,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Full URL of the login endpoint.
    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, Self::LOGIN_PATH)
    }
}

#[async_trait]
impl TokenProvider for AuthClient {
    #[instrument(skip(self), fields(url = %self.login_url()))]
    async fn fetch_token(&self) -> PetstoreResult<Token> {
        debug!("Requesting token from auth service");

        let request = LoginRequest {
            user: &self.credentials.user,
            pass: &self.credentials.pass,
        };

        let response = self
            .http
            .post(self.login_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Auth request failed: {}", e);
                PetstoreError::auth_unavailable(transport_failure(&e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Auth service answered with status {}", status);
            return Err(PetstoreError::auth_rejected(format!(
                "login returned HTTP {}",
                status
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            PetstoreError::auth_unavailable(format!("failed to read login response: {}", e))
        })?;

        let login: LoginResponse = serde_json::from_slice(&body).map_err(|e| {
            PetstoreError::auth_rejected(format!("unparsable login response: {}", e))
        })?;

        match login.token {
            Some(token) if !token.is_empty() => {
                debug!("Token obtained");
                Ok(Token::new(token))
            }
            _ => Err(PetstoreError::auth_rejected(
                "login response did not contain a token",
            )),
        }
    }
}
