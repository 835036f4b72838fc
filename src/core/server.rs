//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic, delegating to `PetService`)
//! - `http_handler()` method (called via ToolRegistry for HTTP transport)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::{petstore::PetService, tools::build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// Instructions advertised to MCP clients.
pub const INSTRUCTIONS: &str = "Petstore MCP server. Use register_pet to add a pet, \
     list_pets to list every pet and find_pets_by_name to look pets up by exact name.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the pet service.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Adapter over the Petstore backends, for HTTP dispatch.
    #[cfg(feature = "http")]
    pet_service: Arc<PetService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the configured Petstore backends.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let pet_service = Arc::new(PetService::from_config(&config.petstore)?);
        Ok(Self::with_service(config, pet_service))
    }

    /// Create a server over an existing pet service.
    pub fn with_service(config: Config, pet_service: Arc<PetService>) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(pet_service.clone()),
            #[cfg(feature = "http")]
            pet_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "outputSchema": t.output_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.pet_service.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
