use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};

use crate::core::error::AppError;
use crate::features::billing::dtos::{BillingView, CheckoutResponseDto};
use crate::features::billing::handlers::BillingState;
use crate::features::billing::models::SubscriptionPlan;
use crate::features::billing::services::CheckoutOutcome;
use crate::shared::templates::{render_page, BILLING_TEMPLATE};
use crate::shared::types::ApiResponse;

/// Billing form page
pub async fn billing_page(State(state): State<BillingState>) -> Result<Html<String>, AppError> {
    let plan = state.plans.require_plan().await?;
    let view = BillingView::new(&plan, state.checkout.is_pending(), None);

    Ok(Html(render_page(BILLING_TEMPLATE, &view)?))
}

/// Billing form submit: full navigation to the provider, or the form again
/// with a notification
pub async fn submit_checkout(State(state): State<BillingState>) -> Result<Response, AppError> {
    let view = match state.checkout.initiate_checkout().await {
        CheckoutOutcome::Redirect { url } => return Ok(Redirect::to(&url).into_response()),
        CheckoutOutcome::Failed { toast } => {
            let plan = state.plans.current_plan().await;
            BillingView::new(&plan, state.checkout.is_pending(), Some(toast))
        }
        CheckoutOutcome::AlreadyPending => {
            let plan = state.plans.current_plan().await;
            BillingView::new(&plan, true, None)
        }
    };

    Ok(Html(render_page(BILLING_TEMPLATE, &view)?).into_response())
}

/// Create a checkout session
#[utoipa::path(
    post,
    path = "/api/billing/checkout",
    tag = "billing",
    responses(
        (status = 200, description = "Checkout session created", body = ApiResponse<CheckoutResponseDto>),
        (status = 409, description = "A checkout request is already in flight"),
        (status = 502, description = "Checkout session could not be created")
    )
)]
pub async fn create_checkout(
    State(state): State<BillingState>,
) -> Result<Json<ApiResponse<CheckoutResponseDto>>, AppError> {
    match state.checkout.initiate_checkout().await {
        CheckoutOutcome::Redirect { url } => Ok(Json(ApiResponse::success(
            Some(CheckoutResponseDto { url }),
            None,
        ))),
        CheckoutOutcome::Failed { toast } => Err(AppError::ExternalServiceError(format!(
            "{} {}",
            toast.title, toast.description
        ))),
        CheckoutOutcome::AlreadyPending => Err(AppError::Conflict(
            "A checkout request is already in progress".to_string(),
        )),
    }
}

/// Current subscription plan
#[utoipa::path(
    get,
    path = "/api/billing/plan",
    tag = "billing",
    responses(
        (status = 200, description = "Subscription plan", body = ApiResponse<SubscriptionPlan>),
        (status = 502, description = "Plan could not be loaded")
    )
)]
pub async fn get_plan(
    State(state): State<BillingState>,
) -> Result<Json<ApiResponse<SubscriptionPlan>>, AppError> {
    let plan = state.plans.require_plan().await?;
    Ok(Json(ApiResponse::success(Some(plan), None)))
}
