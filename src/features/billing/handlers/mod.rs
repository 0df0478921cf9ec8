use std::sync::Arc;

use crate::features::billing::services::{CheckoutService, PlanService};

mod billing_handler;

pub use billing_handler::*;

/// Shared state of the billing routes
#[derive(Clone)]
pub struct BillingState {
    pub checkout: Arc<CheckoutService>,
    pub plans: Arc<PlanService>,
}
