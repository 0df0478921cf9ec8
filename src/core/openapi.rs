use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::billing::{
    dtos as billing_dtos, handlers as billing_handlers, models as billing_models,
};
use crate::features::files::{
    dtos as files_dtos, handlers as files_handlers, models as files_models,
};
use crate::shared::toast::{Toast, ToastVariant};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Files
        files_handlers::list_files,
        files_handlers::delete_file,
        files_handlers::get_deleting_file,
        // Billing
        billing_handlers::create_checkout,
        billing_handlers::get_plan,
    ),
    components(
        schemas(
            // Shared
            Toast,
            ToastVariant,
            // Files
            files_models::File,
            files_dtos::FileListStatus,
            files_dtos::FileListResponseDto,
            files_dtos::DeleteFileDto,
            files_dtos::DeleteFileResponseDto,
            files_dtos::DeletionMarkerDto,
            ApiResponse<files_dtos::FileListResponseDto>,
            ApiResponse<files_dtos::DeleteFileResponseDto>,
            ApiResponse<files_dtos::DeletionMarkerDto>,
            // Billing
            billing_models::SubscriptionPlan,
            billing_models::CheckoutSession,
            billing_dtos::CheckoutResponseDto,
            ApiResponse<billing_dtos::CheckoutResponseDto>,
            ApiResponse<billing_models::SubscriptionPlan>,
        )
    ),
    tags(
        (name = "files", description = "Uploaded documents and deletion"),
        (name = "billing", description = "Subscription plan and checkout sessions"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "DocChat Dashboard API",
        version = "0.1.0",
        description = "API documentation for the DocChat dashboard",
    )
)]
pub struct ApiDoc;

/// Adds the Bearer token scheme forwarded to the document-chat platform
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
