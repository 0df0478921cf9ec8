use std::sync::Arc;

use crate::features::billing::services::PlanService;
use crate::features::files::services::FileListController;

mod dashboard_handler;
mod file_handler;

pub use dashboard_handler::*;
pub use file_handler::*;

/// Shared state of the files routes
#[derive(Clone)]
pub struct FilesState {
    pub controller: Arc<FileListController>,
    pub plans: Arc<PlanService>,
}
