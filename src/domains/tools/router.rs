//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::petstore::PetService;

use super::definitions::{FindPetsByNameTool, ListPetsTool, RegisterPetTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<PetService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(RegisterPetTool::create_route(service.clone()))
        .with_route(ListPetsTool::create_route(service.clone()))
        .with_route(FindPetsByNameTool::create_route(service))
}
