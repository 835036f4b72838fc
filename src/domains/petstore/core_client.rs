//! Core data service client.
//!
//! Every request carries the caller's token in the `token` header. The client
//! itself holds no token.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::error::{PetstoreError, PetstoreResult};
use super::models::{Pet, PetDraft, Token};
use super::{TOKEN_HEADER, transport_failure};

/// Pet operations offered by the core data service.
#[async_trait]
pub trait PetBackend: Send + Sync {
    /// Create a pet and return the stored record.
    async fn create(&self, token: &Token, draft: &PetDraft) -> PetstoreResult<Pet>;

    /// Return every stored pet.
    async fn list_all(&self, token: &Token) -> PetstoreResult<Vec<Pet>>;

    /// Return the pets whose name equals `name`.
    async fn find_by_name(&self, token: &Token, name: &str) -> PetstoreResult<Vec<Pet>>;
}

/// HTTP client for the Petstore core service.
#[derive(Debug, Clone)]
pub struct CoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoreClient {
    /// Pet collection endpoint, relative to the core service base URL.
    pub const PET_PATH: &'static str = "/pet";

    /// Query parameter the core service filters names on.
    pub const NAME_QUERY_PARAM: &'static str = "nome";

    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Full URL of the pet collection.
    pub fn pets_url(&self) -> String {
        format!("{}{}", self.base_url, Self::PET_PATH)
    }

    /// Full URL of a name search, with the name form-encoded.
    pub fn search_url(&self, name: &str) -> PetstoreResult<String> {
        let query = serde_urlencoded::to_string(&[(Self::NAME_QUERY_PARAM, name)])
            .map_err(|e| PetstoreError::invalid_input(format!("cannot encode name: {}", e)))?;
        Ok(format!("{}?{}", self.pets_url(), query))
    }

    /// Create a pet, accepting any success reply.
    ///
    /// Returns the identifier when the reply carries `_id` or `id` (string or
    /// number). Used for bulk seeding, where the stored record is not needed.
    #[instrument(skip(self, token))]
    pub async fn create_lenient(
        &self,
        token: &Token,
        draft: &PetDraft,
    ) -> PetstoreResult<Option<String>> {
        let request = self.http.post(self.pets_url()).json(draft);
        let response = self.dispatch("create pet", request, token).await?;

        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Create reply is not JSON: {}", e);
                return Ok(None);
            }
        };

        Ok(["_id", "id"]
            .iter()
            .filter_map(|key| body.get(*key))
            .find_map(|id| match id {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }))
    }

    /// Send a request with the token header and reject non-success replies.
    async fn dispatch(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
        token: &Token,
    ) -> PetstoreResult<reqwest::Response> {
        let response = request
            .header(TOKEN_HEADER, token.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!("{} request failed: {}", operation, e);
                PetstoreError::data_service(format!("{}: {}", operation, transport_failure(&e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} answered with status {}", operation, status);
            debug!("Rejected response body: {}", body);
            return Err(PetstoreError::data_service(format!(
                "{} returned HTTP {}",
                operation, status
            )));
        }

        Ok(response)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
        token: &Token,
    ) -> PetstoreResult<T> {
        let response = self.dispatch(operation, request, token).await?;

        let body = response.bytes().await.map_err(|e| {
            PetstoreError::data_service(format!("{}: failed to read response: {}", operation, e))
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!("{} returned an unexpected body: {}", operation, e);
            PetstoreError::data_service(format!("{} returned malformed body: {}", operation, e))
        })
    }
}

#[async_trait]
impl PetBackend for CoreClient {
    #[instrument(skip(self, token))]
    async fn create(&self, token: &Token, draft: &PetDraft) -> PetstoreResult<Pet> {
        let request = self.http.post(self.pets_url()).json(draft);
        let pet: Pet = self.send("create pet", request, token).await?;
        debug!("Created pet {}", pet.id);
        Ok(pet)
    }

    #[instrument(skip(self, token))]
    async fn list_all(&self, token: &Token) -> PetstoreResult<Vec<Pet>> {
        let request = self.http.get(self.pets_url());
        let pets: Vec<Pet> = self.send("list pets", request, token).await?;
        debug!("Listed {} pet(s)", pets.len());
        Ok(pets)
    }

    #[instrument(skip(self, token))]
    async fn find_by_name(&self, token: &Token, name: &str) -> PetstoreResult<Vec<Pet>> {
        let request = self.http.get(self.search_url(name)?);
        let pets: Vec<Pet> = self.send("find pets by name", request, token).await?;
        debug!("Found {} pet(s) named '{}'", pets.len(), name);
        Ok(pets)
    }
}
