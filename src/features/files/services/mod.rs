mod file_list_controller;

pub use file_list_controller::{FileListController, FileListState};
