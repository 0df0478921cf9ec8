use async_trait::async_trait;

use crate::features::billing::models::{CheckoutSession, SubscriptionPlan};
use crate::features::files::models::File;
use crate::modules::rpc::RpcError;

/// The three procedures the dashboard consumes from the document-chat platform.
///
/// Transport, authentication and retries belong to the implementation; the
/// controllers only see the request/response contract.
#[async_trait]
pub trait RemoteProcedures: Send + Sync {
    /// Create a checkout (or billing portal) session for the current user
    async fn create_checkout_session(&self) -> Result<CheckoutSession, RpcError>;

    /// List the current user's files, in no particular order
    async fn list_files(&self) -> Result<Vec<File>, RpcError>;

    /// Delete one file by id
    async fn delete_file(&self, id: &str) -> Result<(), RpcError>;
}

/// Server-side source of the user's subscription plan, read once per page render.
#[async_trait]
pub trait SubscriptionPlanSource: Send + Sync {
    async fn get_subscription_plan(&self) -> Result<SubscriptionPlan, RpcError>;
}
