mod checkout_service;
mod plan_service;

pub use checkout_service::{CheckoutOutcome, CheckoutService};
pub use plan_service::PlanService;
