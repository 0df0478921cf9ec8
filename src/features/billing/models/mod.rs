mod checkout_session;
mod subscription_plan;

pub use checkout_session::CheckoutSession;
pub use subscription_plan::SubscriptionPlan;
