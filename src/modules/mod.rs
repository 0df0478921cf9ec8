//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the remote procedure client and the client-side query cache.

pub mod cache;
pub mod rpc;
