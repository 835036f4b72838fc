//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP, the mode agent runtimes use when
//! they spawn the server as a subprocess. Logs must stay on stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single MCP session over stdin/stdout until the client leaves.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - serving {} over stdin/stdout", server.name());

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO session closed");
        Ok(())
    }
}
