use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::FALLBACK_PLAN_NAME;
use crate::shared::format::format_plan_date;

/// The user's current plan, as reported by the billing collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub name: String,
    pub is_subscribed: bool,
    pub is_canceled: bool,
    /// End of the current billing period, known only for paid plans
    pub stripe_current_period_end: Option<DateTime<Utc>>,
}

impl SubscriptionPlan {
    /// Plan assumed when the collaborator cannot be reached
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_PLAN_NAME.to_string(),
            is_subscribed: false,
            is_canceled: false,
            stripe_current_period_end: None,
        }
    }

    pub fn checkout_label(&self) -> &'static str {
        if self.is_subscribed {
            "Manage Subscription"
        } else {
            "Upgrade to PRO"
        }
    }

    /// "Your plan renews on ..." / "Your plan will be canceled on ..." for paid plans
    pub fn period_notice(&self) -> Option<String> {
        if !self.is_subscribed {
            return None;
        }
        let period_end = self.stripe_current_period_end.as_ref()?;
        let prefix = if self.is_canceled {
            "Your plan will be canceled on"
        } else {
            "Your plan renews on"
        };
        Some(format!("{} {}", prefix, format_plan_date(period_end)))
    }
}
