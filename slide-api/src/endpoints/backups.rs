//! Backup endpoints.

use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;

use slide_core::constants::paths;
use slide_core::error::SlideResult;
use slide_models::{Backup, StartBackupPayload};

use crate::client::SlideClient;
use crate::paginate::Paginator;
use crate::request::RequestBuilder;
use crate::response::ListResponse;

/// Client for `/v1/backup`.
#[derive(Debug, Clone, Copy)]
pub struct Backups<'a> {
    client: &'a SlideClient,
}

impl SlideClient {
    pub fn backups(&self) -> Backups<'_> {
        Backups { client: self }
    }
}

impl Backups<'_> {
    /// List all backups, one page at a time.
    pub async fn list<F>(&self, cancel: &CancellationToken, consumer: F) -> SlideResult<()>
    where
        F: FnMut(ListResponse<Backup>) -> SlideResult<()>,
    {
        Paginator::new(self.client, RequestBuilder::new(Method::GET, paths::BACKUP))
            .cancel_on(cancel)
            .run(consumer)
            .await
    }

    /// Get a single backup by ID.
    pub async fn get(&self, backup_id: &str) -> SlideResult<Backup> {
        let request = RequestBuilder::new(Method::GET, paths::BACKUP).segment(backup_id);
        self.client.fetch(request, StatusCode::OK).await
    }

    /// Start a backup of an agent. The server accepts the job and runs it
    /// asynchronously; poll `list`/`get` for its status.
    pub async fn start_backup(&self, agent_id: &str) -> SlideResult<()> {
        let payload = StartBackupPayload {
            agent_id: agent_id.to_string(),
        };
        let request = RequestBuilder::new(Method::POST, paths::BACKUP).json(&payload)?;
        self.client.send(request, StatusCode::ACCEPTED).await
    }
}
