mod billing_dto;
mod billing_view;

pub use billing_dto::CheckoutResponseDto;
pub use billing_view::BillingView;
