use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::AppError;
use crate::core::extractor::ValidatedJson;
use crate::features::files::dtos::{
    DeleteFileDto, DeleteFileResponseDto, DeletionMarkerDto, FileListQuery, FileListResponseDto,
};
use crate::features::files::handlers::FilesState;
use crate::shared::types::ApiResponse;

/// List the user's files, newest first
///
/// With `fetch=false` the cached state is returned as is, `loading` until the
/// first fetch has settled.
#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    params(FileListQuery),
    responses(
        (status = 200, description = "File list state", body = ApiResponse<FileListResponseDto>)
    )
)]
pub async fn list_files(
    State(state): State<FilesState>,
    Query(query): Query<FileListQuery>,
) -> Result<Json<ApiResponse<FileListResponseDto>>, AppError> {
    let files = if query.fetch.unwrap_or(true) {
        state.controller.load_files().await
    } else {
        state.controller.snapshot().await
    };
    let deleting = state.controller.deleting_file_id();

    Ok(Json(ApiResponse::success(
        Some(FileListResponseDto::new(files, deleting)),
        None,
    )))
}

/// Delete a file
///
/// The file list is refreshed before the response is sent.
#[utoipa::path(
    post,
    path = "/api/files/delete",
    tag = "files",
    request_body = DeleteFileDto,
    responses(
        (status = 200, description = "File deleted successfully", body = ApiResponse<DeleteFileResponseDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "File not found"),
        (status = 502, description = "Remote procedure failed")
    )
)]
pub async fn delete_file(
    State(state): State<FilesState>,
    ValidatedJson(dto): ValidatedJson<DeleteFileDto>,
) -> Result<Json<ApiResponse<DeleteFileResponseDto>>, AppError> {
    state.controller.request_delete(&dto.id).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteFileResponseDto { deleted: true }),
        Some("File deleted successfully".to_string()),
    )))
}

/// Id of the file currently being deleted, if any
#[utoipa::path(
    get,
    path = "/api/files/deleting",
    tag = "files",
    responses(
        (status = 200, description = "Current deletion marker", body = ApiResponse<DeletionMarkerDto>)
    )
)]
pub async fn get_deleting_file(
    State(state): State<FilesState>,
) -> Json<ApiResponse<DeletionMarkerDto>> {
    Json(ApiResponse::success(
        Some(DeletionMarkerDto {
            file_id: state.controller.deleting_file_id(),
        }),
        None,
    ))
}
