//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::petstore::PetService;

use super::definitions::{FindPetsByNameTool, ListPetsTool, RegisterPetTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    service: Arc<PetService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(service: Arc<PetService>) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            RegisterPetTool::NAME,
            ListPetsTool::NAME,
            FindPetsByNameTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            RegisterPetTool::to_tool(),
            ListPetsTool::to_tool(),
            FindPetsByNameTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let service = self.service.clone();
        match name {
            RegisterPetTool::NAME => RegisterPetTool::http_handler(arguments, service).await,
            ListPetsTool::NAME => ListPetsTool::http_handler(arguments, service).await,
            FindPetsByNameTool::NAME => FindPetsByNameTool::http_handler(arguments, service).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(super::ToolError::not_found(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::petstore::testing::{MockAuth, MockBackend};

    fn test_service() -> Arc<PetService> {
        Arc::new(PetService::new(
            Arc::new(MockAuth::default()),
            Arc::new(MockBackend::default()),
        ))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_service());
        let names = registry.tool_names();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"register_pet"));
        assert!(names.contains(&"list_pets"));
        assert!(names.contains(&"find_pets_by_name"));
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let registry = ToolRegistry::new(test_service());
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), registry.tool_names().len());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_list() {
        let registry = ToolRegistry::new(test_service());
        let result = registry.call_tool("list_pets", serde_json::json!({})).await;
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_service());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert_eq!(result.unwrap_err(), "Tool not found: unknown");
    }
}
