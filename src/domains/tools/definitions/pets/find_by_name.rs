//! Find pets by name tool.

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

/// Parameters for a name search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FindPetsByNameParams {
    /// The exact name to look for.
    #[schemars(description = "The name of pet to be found (exact match)")]
    pub name: String,
}

/// Structured output for a name search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FindPetsByNameResult {
    pub pets: Vec<Pet>,
    pub total_count: usize,
    pub name: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Find pets by name tool.
pub struct FindPetsByNameTool;

impl FindPetsByNameTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "find_pets_by_name";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns a list with registered pets with a given name. \
         The name must match exactly. An empty list means no pet has that name.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: &FindPetsByNameParams, service: &PetService) -> CallToolResult {
        info!("Find pets by name tool called");

        match service.find_by_name(&params.name).await {
            Ok(pets) => {
                let total_count = pets.len();
                let summary = format!("Found {} pet(s) named '{}'", total_count, params.name);
                let data = FindPetsByNameResult {
                    pets,
                    total_count,
                    name: params.name.clone(),
                };
                structured_result(summary, &data)
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
        let params: FindPetsByNameParams = super::common::parse_http_arguments(arguments)?;

        info!("Find pets by name tool (HTTP) called: '{}'", params.name);

        let result = Self::execute(&params, &service).await;
        super::common::http_response(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<FindPetsByNameParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<FindPetsByNameResult>().into()),
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
                let params: FindPetsByNameParams =
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
