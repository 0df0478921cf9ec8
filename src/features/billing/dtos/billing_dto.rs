use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for a created checkout session
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckoutResponseDto {
    /// Provider URL the client must navigate to
    pub url: String,
}
