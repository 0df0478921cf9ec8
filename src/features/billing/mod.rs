//! Billing form: subscription plan display and checkout session redirect.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/dashboard/billing` | HTML billing form |
//! | POST | `/dashboard/billing` | Start checkout; redirect or show notification |
//! | POST | `/api/billing/checkout` | Create a checkout session |
//! | GET | `/api/billing/plan` | Current subscription plan |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use handlers::BillingState;
pub use routes::routes;
pub use services::{CheckoutService, PlanService};
