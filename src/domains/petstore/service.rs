//! Pet service - the adapter between tool calls and the Petstore backends.
//!
//! Each operation validates its input, obtains a fresh token, and performs
//! exactly one core service call with it. Failures are returned unchanged.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument};

use super::auth_client::{AuthClient, TokenProvider};
use super::core_client::{CoreClient, PetBackend};
use super::error::{PetstoreError, PetstoreResult};
use super::models::{Pet, PetDraft};
use crate::core::config::PetstoreConfig;
use crate::core::Error;

/// Adapter used by the pet tools.
#[derive(Clone)]
pub struct PetService {
    auth: Arc<dyn TokenProvider>,
    backend: Arc<dyn PetBackend>,
}

impl PetService {
    /// Create a service over arbitrary collaborators.
    pub fn new(auth: Arc<dyn TokenProvider>, backend: Arc<dyn PetBackend>) -> Self {
        Self { auth, backend }
    }

    /// Create a service talking to the configured auth and core services.
    pub fn from_config(config: &PetstoreConfig) -> crate::core::Result<Self> {
        let http = super::http_client(Duration::from_secs(config.request_timeout_secs))
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;

        let auth = AuthClient::new(http.clone(), &config.auth_url, config.credentials.clone());
        let backend = CoreClient::new(http, &config.core_url);

        Ok(Self::new(Arc::new(auth), Arc::new(backend)))
    }

    /// Register a new pet.
    #[instrument(skip(self))]
    pub async fn register(&self, name: &str, breed: &str, age: i64) -> PetstoreResult<Pet> {
        let draft = PetDraft::new(
            require_text("name", name)?,
            require_text("breed", breed)?,
            require_age(age)?,
        );

        let token = self.auth.fetch_token().await?;
        let pet = self.backend.create(&token, &draft).await?;

        info!("Registered pet '{}' with id {}", pet.name, pet.id);
        Ok(pet)
    }

    /// List every registered pet.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> PetstoreResult<Vec<Pet>> {
        let token = self.auth.fetch_token().await?;
        let pets = self.backend.list_all(&token).await?;

        info!("Listed {} pet(s)", pets.len());
        Ok(pets)
    }

    /// Find pets whose name equals `name` exactly.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> PetstoreResult<Vec<Pet>> {
        let name = require_text("name", name)?;

        let token = self.auth.fetch_token().await?;
        let pets = self.backend.find_by_name(&token, name).await?;

        info!("Found {} pet(s) named '{}'", pets.len(), name);
        Ok(pets)
    }
}

fn require_text<'a>(field: &str, value: &'a str) -> PetstoreResult<&'a str> {
    if value.trim().is_empty() {
        return Err(PetstoreError::invalid_input(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(value)
}

fn require_age(age: i64) -> PetstoreResult<u32> {
    u32::try_from(age).map_err(|_| {
        PetstoreError::invalid_input(format!(
            "age must be an integer between 0 and {}, got {}",
            u32::MAX,
            age
        ))
    })
}
