//! File restore endpoints.

use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;

use slide_core::constants::paths;
use slide_core::error::SlideResult;
use slide_models::{FileRestore, FileRestoreData, FileRestorePayload};

use crate::client::SlideClient;
use crate::paginate::Paginator;
use crate::request::RequestBuilder;
use crate::response::ListResponse;

/// Client for `/v1/restore/file`.
#[derive(Debug, Clone, Copy)]
pub struct FileRestores<'a> {
    client: &'a SlideClient,
}

impl SlideClient {
    pub fn file_restores(&self) -> FileRestores<'_> {
        FileRestores { client: self }
    }
}

impl FileRestores<'_> {
    /// List all file restores, one page at a time.
    pub async fn list<F>(&self, cancel: &CancellationToken, consumer: F) -> SlideResult<()>
    where
        F: FnMut(ListResponse<FileRestore>) -> SlideResult<()>,
    {
        Paginator::new(
            self.client,
            RequestBuilder::new(Method::GET, paths::FILE_RESTORE),
        )
        .cancel_on(cancel)
        .run(consumer)
        .await
    }

    /// Get a single file restore by ID.
    pub async fn get(&self, file_restore_id: &str) -> SlideResult<FileRestore> {
        let request =
            RequestBuilder::new(Method::GET, paths::FILE_RESTORE).segment(file_restore_id);
        self.client.fetch(request, StatusCode::OK).await
    }

    /// Mount a snapshot for file-level restore.
    pub async fn create(&self, payload: &FileRestorePayload) -> SlideResult<FileRestore> {
        let request = RequestBuilder::new(Method::POST, paths::FILE_RESTORE).json(payload)?;
        self.client.fetch(request, StatusCode::CREATED).await
    }

    /// Tear down a file restore.
    pub async fn delete(&self, file_restore_id: &str) -> SlideResult<()> {
        let request =
            RequestBuilder::new(Method::DELETE, paths::FILE_RESTORE).segment(file_restore_id);
        self.client.send(request, StatusCode::NO_CONTENT).await
    }

    /// List the entries of a directory inside a file restore, one page at a time.
    ///
    /// `path` selects the directory to browse; `None` browses the root.
    pub async fn browse<F>(
        &self,
        file_restore_id: &str,
        path: Option<&str>,
        cancel: &CancellationToken,
        consumer: F,
    ) -> SlideResult<()>
    where
        F: FnMut(ListResponse<FileRestoreData>) -> SlideResult<()>,
    {
        let request = RequestBuilder::new(Method::GET, paths::FILE_RESTORE)
            .segment(file_restore_id)
            .segment(paths::BROWSE)
            .query_opt("path", path);
        Paginator::new(self.client, request)
            .cancel_on(cancel)
            .run(consumer)
            .await
    }
}
