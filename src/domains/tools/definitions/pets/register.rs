//! Register pet tool.
//!
//! Creates a pet in the Petstore core service and returns the stored record.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::petstore::{Pet, PetService};

use super::common::{error_result, structured_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for registering a pet.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegisterPetParams {
    /// The pet name.
    #[schemars(description = "The pet name")]
    pub name: String,

    /// The pet breed.
    #[schemars(description = "The pet breed")]
    pub breed: String,

    /// The pet age in years. Signed so that negative values reach validation
    /// and are reported as bad input.
    #[schemars(description = "The pet age in years (non-negative integer)")]
    pub age: i64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Register pet tool - creates a pet record.
pub struct RegisterPetTool;

impl RegisterPetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "register_pet";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Register a new pet. Takes the pet name, breed and age in years. \
         Returns the created pet record, including the identifier assigned by the Petstore.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name, breed = %params.breed, age = params.age))]
    pub async fn execute(params: &RegisterPetParams, service: &PetService) -> CallToolResult {
        info!("Register pet tool called");

        match service
            .register(&params.name, &params.breed, params.age)
            .await
        {
            Ok(pet) => {
                let summary = format!(
                    "Registered pet '{}' ({}, {} years) with id {}",
                    pet.name, pet.breed, pet.age, pet.id
                );
                structured_result(summary, &pet)
            }
            Err(e) => error_result(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        service: Arc<PetService>,
    ) -> Result<serde_json::Value, String> {
        let params: RegisterPetParams = super::common::parse_http_arguments(arguments)?;

        info!("Register pet tool (HTTP) called: '{}'", params.name);

        let result = Self::execute(&params, &service).await;
        super::common::http_response(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<RegisterPetParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<Pet>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(service: Arc<PetService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let service = service.clone();
            async move {
                let params: RegisterPetParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &service).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::petstore::testing::{MockAuth, MockBackend};
    use crate::domains::tools::definitions::pets::common::result_text;
    use std::sync::atomic::Ordering;

    fn params(name: &str, breed: &str, age: i64) -> RegisterPetParams {
        RegisterPetParams {
            name: name.to_string(),
            breed: breed.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn test_register_returns_created_pet() {
        let auth = Arc::new(MockAuth::default());
        let backend = Arc::new(MockBackend::default());
        let service = PetService::new(auth.clone(), backend.clone());

        let result = RegisterPetTool::execute(&params("Rex", "Beagle", 3), &service).await;

        assert_eq!(result.is_error, Some(false));
        let pet: Pet = serde_json::from_value(result.structured_content.unwrap()).unwrap();
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.breed, "Beagle");
        assert_eq!(pet.age, 3);
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_register_negative_age_is_bad_input() {
        let auth = Arc::new(MockAuth::default());
        let backend = Arc::new(MockBackend::default());
        let service = PetService::new(auth.clone(), backend.clone());

        let result = RegisterPetTool::execute(&params("Rex", "Beagle", -4), &service).await;

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("invalid_tool_input"));
        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_register_auth_failure() {
        let auth = Arc::new(MockAuth {
            fail: true,
            ..Default::default()
        });
        let backend = Arc::new(MockBackend::default());
        let service = PetService::new(auth, backend.clone());

        let result = RegisterPetTool::execute(&params("Rex", "Beagle", 3), &service).await;

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("auth_unavailable"));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_params_reject_fractional_age() {
        let json = r#"{"name": "Rex", "breed": "Beagle", "age": 2.5}"#;
        assert!(serde_json::from_str::<RegisterPetParams>(json).is_err());
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = RegisterPetTool::to_tool();
        assert_eq!(tool.name, RegisterPetTool::NAME);
        assert!(tool.description.is_some());
        assert!(tool.output_schema.is_some());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_register_http_handler() {
        let service = Arc::new(PetService::new(
            Arc::new(MockAuth::default()),
            Arc::new(MockBackend::default()),
        ));
        let args = serde_json::json!({"name": "Rex", "breed": "Beagle", "age": 3});

        let response = RegisterPetTool::http_handler(args, service).await.unwrap();

        assert_eq!(response["isError"], serde_json::json!(false));
        assert_eq!(response["structuredContent"]["name"], "Rex");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_register_http_handler_missing_param() {
        let service = Arc::new(PetService::new(
            Arc::new(MockAuth::default()),
            Arc::new(MockBackend::default()),
        ));
        let args = serde_json::json!({"name": "Rex"});

        let result = RegisterPetTool::http_handler(args, service).await;
        assert!(result.is_err());
    }
}
