use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::features::files::dtos::DashboardView;
use crate::features::files::handlers::FilesState;
use crate::shared::constants::{DASHBOARD_PATH, DELETE_FAILED_FLAG};
use crate::shared::templates::{render_page, DASHBOARD_TEMPLATE};
use crate::shared::toast::Toast;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub error: Option<String>,
}

/// "My Files" page
pub async fn dashboard_page(
    State(state): State<FilesState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let (plan, files) = tokio::join!(state.plans.current_plan(), state.controller.load_files());

    let toast = (query.error.as_deref() == Some(DELETE_FAILED_FLAG)).then(Toast::delete_failed);
    let deleting = state.controller.deleting_file_id();
    let view = DashboardView::new(files, &plan, deleting.as_deref(), toast);

    Ok(Html(render_page(DASHBOARD_TEMPLATE, &view)?))
}

/// Delete button of a file card; always lands back on the dashboard
pub async fn delete_file_action(
    State(state): State<FilesState>,
    Path(id): Path<String>,
) -> Redirect {
    match state.controller.request_delete(&id).await {
        Ok(()) => Redirect::to(DASHBOARD_PATH),
        Err(_) => Redirect::to(&format!("{}?error={}", DASHBOARD_PATH, DELETE_FAILED_FLAG)),
    }
}
