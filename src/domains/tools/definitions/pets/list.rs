//! List pets tool.
//!
//! Returns every pet registered in the Petstore core service.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::petstore::{Pet, PetService};

use super::common::{error_result, structured_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for listing pets. The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListPetsParams {}

/// Structured output for the pet list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListPetsResult {
    pub pets: Vec<Pet>,
    pub total_count: usize,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List pets tool.
pub struct ListPetsTool;

impl ListPetsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_pets";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Returns a list with all registered pets. An empty list means no pet is registered.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(_params: &ListPetsParams, service: &PetService) -> CallToolResult {
        info!("List pets tool called");

        match service.list_all().await {
            Ok(pets) => {
                let total_count = pets.len();
                let summary = format!("Found {} registered pet(s)", total_count);
                structured_result(summary, &ListPetsResult { pets, total_count })
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
        let params: ListPetsParams = if arguments.is_null() {
            ListPetsParams::default()
        } else {
            super::common::parse_http_arguments(arguments)?
        };

        info!("List pets tool (HTTP) called");

        let result = Self::execute(&params, &service).await;
        super::common::http_response(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListPetsParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<ListPetsResult>().into()),
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
                let params: ListPetsParams =
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
    use crate::domains::petstore::testing::{MockAuth, MockBackend, pet};
    use crate::domains::tools::definitions::pets::common::result_text;

    #[tokio::test]
    async fn test_list_returns_all_pets() {
        let backend = MockBackend::with_pets(vec![pet("1", "Rex"), pet("2", "Luna")]);
        let service = PetService::new(Arc::new(MockAuth::default()), Arc::new(backend));

        let result = ListPetsTool::execute(&ListPetsParams::default(), &service).await;

        assert_eq!(result.is_error, Some(false));
        let list: ListPetsResult =
            serde_json::from_value(result.structured_content.unwrap()).unwrap();
        assert_eq!(list.total_count, 2);
        assert_eq!(list.pets[1].name, "Luna");
    }

    #[tokio::test]
    async fn test_list_empty_is_success() {
        let service = PetService::new(
            Arc::new(MockAuth::default()),
            Arc::new(MockBackend::default()),
        );

        let result = ListPetsTool::execute(&ListPetsParams::default(), &service).await;

        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).starts_with("Found 0 registered pet(s)"));
    }

    #[tokio::test]
    async fn test_list_data_service_failure() {
        let backend = MockBackend {
            fail_status: Some(500),
            pets: vec![pet("1", "Rex")],
            ..Default::default()
        };
        let service = PetService::new(Arc::new(MockAuth::default()), Arc::new(backend));

        let result = ListPetsTool::execute(&ListPetsParams::default(), &service).await;

        assert_eq!(result.is_error, Some(true));
        assert!(result.structured_content.is_none());
        assert!(result_text(&result).contains("data_service_error"));
    }

    #[test]
    fn test_params_from_empty_object() {
        assert!(serde_json::from_str::<ListPetsParams>("{}").is_ok());
    }
}
