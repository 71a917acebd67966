//! Agent endpoints.

use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;

use slide_core::constants::paths;
use slide_core::error::SlideResult;
use slide_models::{
    Agent, AgentAutoPairPayload, AgentAutoPairResponse, AgentPairPayload, AgentUpdatePayload,
};

use crate::client::SlideClient;
use crate::paginate::Paginator;
use crate::request::RequestBuilder;
use crate::response::ListResponse;

/// Client for `/v1/agent`.
#[derive(Debug, Clone, Copy)]
pub struct Agents<'a> {
    client: &'a SlideClient,
}

impl SlideClient {
    pub fn agents(&self) -> Agents<'_> {
        Agents { client: self }
    }
}

impl Agents<'_> {
    /// List all agents, one page at a time.
    pub async fn list<F>(&self, cancel: &CancellationToken, consumer: F) -> SlideResult<()>
    where
        F: FnMut(ListResponse<Agent>) -> SlideResult<()>,
    {
        Paginator::new(self.client, RequestBuilder::new(Method::GET, paths::AGENT))
            .cancel_on(cancel)
            .run(consumer)
            .await
    }

    /// Get a single agent by ID.
    pub async fn get(&self, agent_id: &str) -> SlideResult<Agent> {
        let request = RequestBuilder::new(Method::GET, paths::AGENT).segment(agent_id);
        self.client.fetch(request, StatusCode::OK).await
    }

    /// Change an agent's display name.
    pub async fn update(&self, agent_id: &str, display_name: &str) -> SlideResult<Agent> {
        let payload = AgentUpdatePayload {
            display_name: display_name.to_string(),
        };
        let request = RequestBuilder::new(Method::PATCH, paths::AGENT)
            .segment(agent_id)
            .json(&payload)?;
        self.client.fetch(request, StatusCode::OK).await
    }

    /// Create an agent for a device and get the code it pairs with.
    pub async fn auto_pair(
        &self,
        payload: &AgentAutoPairPayload,
    ) -> SlideResult<AgentAutoPairResponse> {
        let request = RequestBuilder::new(Method::POST, paths::AGENT).json(payload)?;
        self.client.fetch(request, StatusCode::CREATED).await
    }

    /// Pair an installed agent with a device.
    pub async fn pair(&self, payload: &AgentPairPayload) -> SlideResult<Agent> {
        let request = RequestBuilder::new(Method::POST, paths::AGENT).json(payload)?;
        self.client.fetch(request, StatusCode::OK).await
    }
}
