mod deletion_marker;
mod file;

pub use deletion_marker::DeletionMarker;
pub use file::{sort_newest_first, File};
