use serde::Serialize;

use crate::features::billing::models::SubscriptionPlan;
use crate::shared::constants::BILLING_PATH;
use crate::shared::toast::Toast;

/// Context of the billing form page
#[derive(Debug, Serialize)]
pub struct BillingView {
    pub title: &'static str,
    pub action: &'static str,
    pub plan_name: String,
    pub button_label: &'static str,
    pub is_pending: bool,
    pub period_notice: Option<String>,
    pub toast: Option<Toast>,
}

impl BillingView {
    pub fn new(plan: &SubscriptionPlan, is_pending: bool, toast: Option<Toast>) -> Self {
        Self {
            title: "Billing",
            action: BILLING_PATH,
            plan_name: plan.name.clone(),
            button_label: plan.checkout_label(),
            is_pending,
            period_notice: plan.period_notice(),
            toast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::templates::{render_page, BILLING_TEMPLATE};
    use crate::shared::test_helpers::{free_plan, pro_plan};

    fn render(view: &BillingView) -> String {
        render_page(BILLING_TEMPLATE, view).unwrap()
    }

    #[test]
    fn test_free_plan_form() {
        let html = render(&BillingView::new(&free_plan(), false, None));

        assert!(html.contains("Subscription Plan"));
        assert!(html.contains("You are currently on the <strong>Free</strong> plan."));
        assert!(html.contains("Upgrade to PRO"));
        assert!(!html.contains("plan-period"));
        assert!(!html.contains("spinner"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_subscribed_plan_shows_renewal() {
        let html = render(&BillingView::new(&pro_plan(false), false, None));

        assert!(html.contains("Manage Subscription"));
        assert!(html.contains("Your plan renews on 31.12.2024"));
    }

    #[test]
    fn test_canceled_plan_shows_cancellation() {
        let html = render(&BillingView::new(&pro_plan(true), false, None));

        assert!(html.contains("Your plan will be canceled on 31.12.2024"));
    }

    #[test]
    fn test_pending_disables_button() {
        let html = render(&BillingView::new(&free_plan(), true, None));

        assert!(html.contains("spinner"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_failure_toast() {
        let html = render(&BillingView::new(
            &free_plan(),
            false,
            Some(Toast::checkout_failed()),
        ));

        assert!(html.contains(r#"data-toast="destructive""#));
        assert!(html.contains("There was a problem..."));
        assert!(html.contains("Please try again in a moment"));
    }
}
