use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response of the create-checkout-session procedure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckoutSession {
    /// Hosted checkout or billing portal URL; absent when the provider gave none
    #[serde(default)]
    pub url: Option<String>,
}
