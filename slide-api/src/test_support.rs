//! Canned transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use slide_core::config::ClientConfig;
use slide_core::error::{SlideError, SlideResult};

use crate::client::SlideClient;
use crate::request::ApiRequest;
use crate::response::RawResponse;
use crate::transport::Transport;

/// Replays queued responses in order and records every request it receives.
///
/// Every queued response must be requested exactly once; leftovers fail the
/// test when the transport is dropped.
pub(crate) struct QueueTransport {
    responses: Mutex<VecDeque<SlideResult<RawResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl QueueTransport {
    pub(crate) fn new(responses: Vec<RawResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::from([Err(SlideError::Transport(message.into()))])),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for QueueTransport {
    async fn execute(&self, request: ApiRequest) -> SlideResult<RawResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {request:?}"))
    }
}

impl Drop for QueueTransport {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        let left = self.responses.get_mut().map(|q| q.len()).unwrap_or(0);
        assert_eq!(left, 0, "{left} queued response(s) never requested");
    }
}

/// Accepts requests and never answers them.
#[derive(Default)]
pub(crate) struct StalledTransport {
    pub(crate) received: Notify,
}

#[async_trait]
impl Transport for StalledTransport {
    async fn execute(&self, _request: ApiRequest) -> SlideResult<RawResponse> {
        self.received.notify_one();
        std::future::pending().await
    }
}

pub(crate) fn client_with(transport: Arc<dyn Transport>) -> SlideClient {
    SlideClient::with_transport(ClientConfig::new("fakeToken"), transport).unwrap()
}

/// A listing page whose items are `{"id": ...}` objects.
pub(crate) fn page(ids: &[&str], total: Option<u64>, next_offset: Option<u64>) -> RawResponse {
    let data: Vec<_> = ids.iter().map(|id| json!({ "id": id })).collect();
    let mut pagination = serde_json::Map::new();
    if let Some(total) = total {
        pagination.insert("total".into(), json!(total));
    }
    if let Some(next) = next_offset {
        pagination.insert("next_offset".into(), json!(next));
    }
    RawResponse::new(
        200,
        json!({ "pagination": pagination, "data": data }).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "never requested")]
    fn test_leftover_response_fails_on_drop() {
        let transport = QueueTransport::new(vec![RawResponse::empty(204)]);
        drop(transport);
    }
}
