use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A document uploaded to the chat platform, as listed by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Stable, unique identifier of the file
    pub id: String,
    /// Original file name
    pub name: String,
    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

/// Copy of `files` ordered by creation time, newest first.
///
/// The remote store gives no ordering guarantee, so this runs on every read.
pub fn sort_newest_first(files: &[File]) -> Vec<File> {
    let mut sorted = files.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}
