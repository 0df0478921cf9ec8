use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::files::models::File;
use crate::features::files::services::FileListState;

/// Which of the four file list presentations applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileListStatus {
    Loading,
    Empty,
    Ready,
    Error,
}

/// Query params for the file list
#[derive(Debug, Deserialize, IntoParams)]
pub struct FileListQuery {
    /// Fetch when the cache is missing or stale (default `true`); `false` reads the cache only
    pub fetch: Option<bool>,
}

/// Response DTO for the file list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileListResponseDto {
    pub status: FileListStatus,
    /// Files ordered newest first; empty unless `status` is `ready`
    pub files: Vec<File>,
    /// Why the list could not be loaded, when `status` is `error`
    pub error: Option<String>,
    /// Id of the file whose delete is in flight, if any
    pub deleting_file_id: Option<String>,
}

impl FileListResponseDto {
    pub fn new(state: FileListState, deleting_file_id: Option<String>) -> Self {
        let (status, files, error) = match state {
            FileListState::Loading => (FileListStatus::Loading, Vec::new(), None),
            FileListState::Empty => (FileListStatus::Empty, Vec::new(), None),
            FileListState::Ready(files) => (FileListStatus::Ready, files, None),
            FileListState::Failed(message) => (FileListStatus::Error, Vec::new(), Some(message)),
        };

        Self {
            status,
            files,
            error,
            deleting_file_id,
        }
    }
}

/// Request DTO for deleting a file
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteFileDto {
    /// Id of the file to delete
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteFileResponseDto {
    pub deleted: bool,
}

/// Response DTO for the deletion marker
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletionMarkerDto {
    pub file_id: Option<String>,
}
