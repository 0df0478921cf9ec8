use serde::Serialize;

use crate::features::billing::models::SubscriptionPlan;
use crate::features::files::dtos::FileListStatus;
use crate::features::files::models::File;
use crate::features::files::services::FileListState;
use crate::shared::constants::DASHBOARD_PATH;
use crate::shared::format::format_file_date;
use crate::shared::toast::Toast;

#[derive(Debug, Serialize)]
pub struct FileCardView {
    pub id: String,
    pub name: String,
    pub href: String,
    pub delete_action: String,
    pub created_label: String,
    pub is_deleting: bool,
}

impl FileCardView {
    fn new(file: File, deleting_file_id: Option<&str>) -> Self {
        Self {
            href: format!("{}/{}", DASHBOARD_PATH, file.id),
            delete_action: format!("{}/files/{}/delete", DASHBOARD_PATH, file.id),
            created_label: format_file_date(&file.created_at),
            is_deleting: deleting_file_id == Some(file.id.as_str()),
            id: file.id,
            name: file.name,
        }
    }
}

/// Context of the "My Files" page
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub plan_name: String,
    pub is_subscribed: bool,
    pub upload_label: &'static str,
    pub state: FileListStatus,
    pub files: Vec<FileCardView>,
    pub error: Option<String>,
    pub toast: Option<Toast>,
}

impl DashboardView {
    pub fn new(
        state: FileListState,
        plan: &SubscriptionPlan,
        deleting_file_id: Option<&str>,
        toast: Option<Toast>,
    ) -> Self {
        let (status, files, error) = match state {
            FileListState::Loading => (FileListStatus::Loading, Vec::new(), None),
            FileListState::Empty => (FileListStatus::Empty, Vec::new(), None),
            FileListState::Ready(files) => (
                FileListStatus::Ready,
                files
                    .into_iter()
                    .map(|file| FileCardView::new(file, deleting_file_id))
                    .collect(),
                None,
            ),
            FileListState::Failed(message) => (FileListStatus::Error, Vec::new(), Some(message)),
        };

        Self {
            title: "My Files",
            plan_name: plan.name.clone(),
            is_subscribed: plan.is_subscribed,
            upload_label: "Upload PDF",
            state: status,
            files,
            error,
            toast,
        }
    }
}
