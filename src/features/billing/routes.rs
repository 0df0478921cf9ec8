use axum::{
    routing::{get, post},
    Router,
};

use crate::features::billing::handlers::{
    billing_page, create_checkout, get_plan, submit_checkout, BillingState,
};

/// Create routes for the billing feature
pub fn routes(state: BillingState) -> Router {
    Router::new()
        .route("/dashboard/billing", get(billing_page).post(submit_checkout))
        .route("/api/billing/checkout", post(create_checkout))
        .route("/api/billing/plan", get(get_plan))
        .with_state(state)
}
