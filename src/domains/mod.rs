//! Domains module containing business logic organized by bounded contexts.
//!
//! - `petstore`: the Petstore backends and the adapter over them
//! - `tools`: the MCP tools built on top of the adapter

pub mod petstore;
pub mod tools;
