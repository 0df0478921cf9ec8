//! Remote procedure layer - client for the document-chat platform's API
//!
//! Controllers depend on the [`RemoteProcedures`] and [`SubscriptionPlanSource`]
//! traits; [`HttpRpcClient`] is the production implementation.

mod client;
mod error;
mod http_client;

pub use client::{RemoteProcedures, SubscriptionPlanSource};
pub use error::RpcError;
pub use http_client::HttpRpcClient;
