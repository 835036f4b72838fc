//! Petstore MCP Server Library
//!
//! This crate exposes the Petstore backends to MCP clients as three tools:
//! register a pet, list all pets, and find pets by name. Each tool call logs
//! in against the auth service and then performs one call against the core
//! data service with the issued token.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **petstore**: auth/core HTTP clients and the pet service adapter
//!   - **tools**: MCP tool definitions, router and registry
//!
//! # Example
//!
//! ```rust,no_run
//! use petstore_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
