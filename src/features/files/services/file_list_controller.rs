use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::error::Result;
use crate::features::files::models::{sort_newest_first, DeletionMarker, File};
use crate::modules::cache::{QueryCache, QueryFetcher, QuerySnapshot, Refresher};
use crate::modules::rpc::{RemoteProcedures, RpcError};

/// Name of the cached file collection query
pub const USER_FILES_QUERY: &str = "getUserFiles";

/// Presentation state of the file list. Loading, empty and failed are kept
/// apart so a view never shows an empty list while data is still coming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileListState {
    Loading,
    Empty,
    /// Files ordered newest first
    Ready(Vec<File>),
    Failed(String),
}

impl FileListState {
    fn from_snapshot(snapshot: QuerySnapshot<Vec<File>>) -> Self {
        match snapshot {
            QuerySnapshot::Pending => FileListState::Loading,
            QuerySnapshot::Ready(files) if files.is_empty() => FileListState::Empty,
            QuerySnapshot::Ready(files) => FileListState::Ready(sort_newest_first(&files)),
            QuerySnapshot::Failed(message) => FileListState::Failed(message),
        }
    }
}

/// Fetches the file collection through the remote procedure layer
pub struct UserFilesQuery {
    remote: Arc<dyn RemoteProcedures>,
}

impl UserFilesQuery {
    pub fn new(remote: Arc<dyn RemoteProcedures>) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl QueryFetcher<Vec<File>> for UserFilesQuery {
    async fn fetch(&self) -> std::result::Result<Vec<File>, RpcError> {
        self.remote.list_files().await
    }
}

/// Owns the dashboard's file list: cached reads, and deletes that track the
/// busy row and refresh the collection.
pub struct FileListController {
    remote: Arc<dyn RemoteProcedures>,
    files: Arc<QueryCache<Vec<File>>>,
    refresher: Arc<dyn Refresher>,
    marker: Arc<DeletionMarker>,
}

impl FileListController {
    /// Controller whose deletes refresh its own file cache
    pub fn new(remote: Arc<dyn RemoteProcedures>) -> Self {
        let files = Arc::new(QueryCache::new(
            USER_FILES_QUERY,
            Arc::new(UserFilesQuery::new(Arc::clone(&remote))) as Arc<dyn QueryFetcher<Vec<File>>>,
        ));
        let refresher = Arc::clone(&files) as Arc<dyn Refresher>;
        Self::with_refresher(remote, files, refresher)
    }

    pub fn with_refresher(
        remote: Arc<dyn RemoteProcedures>,
        files: Arc<QueryCache<Vec<File>>>,
        refresher: Arc<dyn Refresher>,
    ) -> Self {
        Self {
            remote,
            files,
            refresher,
            marker: Arc::new(DeletionMarker::new()),
        }
    }

    /// Read the file list, fetching it when the cache is missing or stale
    pub async fn load_files(&self) -> FileListState {
        FileListState::from_snapshot(self.files.get().await)
    }

    /// Read the file list as it is right now, without fetching. `Loading`
    /// until the first fetch settles.
    pub async fn snapshot(&self) -> FileListState {
        FileListState::from_snapshot(self.files.snapshot().await)
    }

    pub fn deleting_file_id(&self) -> Option<String> {
        self.marker.current()
    }

    /// Delete one file.
    ///
    /// Marks the row before dispatching, refreshes the file collection only on
    /// success, and clears the marker once the request has settled either way.
    pub async fn request_delete(&self, file_id: &str) -> Result<()> {
        let marker = self.marker.mark(file_id);
        debug!("Deleting file {}", file_id);

        let result = match self.remote.delete_file(file_id).await {
            Ok(()) => {
                info!("File deleted: id={}", file_id);
                self.refresher.invalidate().await;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to delete file {}: {}", file_id, e);
                Err(e.into())
            }
        };

        drop(marker);
        result
    }
}
