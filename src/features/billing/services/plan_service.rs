use std::sync::Arc;
use tracing::warn;

use crate::core::error::Result;
use crate::features::billing::models::SubscriptionPlan;
use crate::modules::rpc::SubscriptionPlanSource;

/// Reads the user's subscription plan for page renders
pub struct PlanService {
    source: Arc<dyn SubscriptionPlanSource>,
}

impl PlanService {
    pub fn new(source: Arc<dyn SubscriptionPlanSource>) -> Self {
        Self { source }
    }

    /// Current plan, or an error when the collaborator cannot be reached
    pub async fn require_plan(&self) -> Result<SubscriptionPlan> {
        Ok(self.source.get_subscription_plan().await?)
    }

    /// Current plan, falling back to the free plan so secondary views still render
    pub async fn current_plan(&self) -> SubscriptionPlan {
        match self.source.get_subscription_plan().await {
            Ok(plan) => plan,
            Err(e) => {
                warn!("Failed to load subscription plan, using fallback: {}", e);
                SubscriptionPlan::fallback()
            }
        }
    }
}
