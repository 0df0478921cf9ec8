use axum::{
    routing::{get, post},
    Router,
};

use crate::features::files::handlers::{
    dashboard_page, delete_file, delete_file_action, get_deleting_file, list_files, FilesState,
};

/// Create routes for the files feature
pub fn routes(state: FilesState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard_page))
        .route("/dashboard/files/{id}/delete", post(delete_file_action))
        .route("/api/files", get(list_files))
        .route("/api/files/delete", post(delete_file))
        .route("/api/files/deleting", get(get_deleting_file))
        .with_state(state)
}
