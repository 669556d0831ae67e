//! MCP presentation layer
//!
//! Exposes the weather tools over the Model Context Protocol on
//! stdin/stdout. The server speaks line-delimited JSON-RPC 2.0: one
//! request per line in, one response per line out. All logging goes to
//! stderr so stdout stays clean for the protocol.

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
