mod dashboard_view;
mod file_dto;

pub use dashboard_view::DashboardView;
pub use file_dto::{
    DeleteFileDto, DeleteFileResponseDto, DeletionMarkerDto, FileListQuery, FileListResponseDto,
    FileListStatus,
};
