//! Offset pagination over listing endpoints.
//!
//! The first request carries no `offset`; every following request carries the
//! `pagination.next_offset` reported by the previous page. A listing is
//! exhausted when the server omits `next_offset` or when the items received so
//! far reach `pagination.total`. Pages are fetched one at a time and handed to
//! the consumer in order.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use slide_core::constants::OFFSET_PARAM;
use slide_core::error::{SlideError, SlideResult};

use crate::client::SlideClient;
use crate::request::RequestBuilder;
use crate::response::{self, ListResponse, Pagination};

/// Drives one listing from the first page to the last.
pub struct Paginator<'a> {
    client: &'a SlideClient,
    request: RequestBuilder,
    cancel: CancellationToken,
}

impl<'a> Paginator<'a> {
    /// `request` describes the first page; the offset is added per page.
    pub fn new(client: &'a SlideClient, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            cancel: CancellationToken::new(),
        }
    }

    /// Abort the listing when `token` is cancelled.
    pub fn cancel_on(mut self, token: &CancellationToken) -> Self {
        self.cancel = token.clone();
        self
    }

    /// Fetch every page, calling `consumer` once per page.
    ///
    /// An error returned by `consumer` stops the listing and is returned as-is;
    /// no further page is requested. Cancellation is checked before each page
    /// and while a page is in flight, and yields `SlideError::Cancelled`.
    pub async fn run<T, F>(self, mut consumer: F) -> SlideResult<()>
    where
        T: DeserializeOwned,
        F: FnMut(ListResponse<T>) -> SlideResult<()>,
    {
        let mut offset: Option<u64> = None;
        let mut received: u64 = 0;

        loop {
            if self.cancel.is_cancelled() {
                debug!("listing cancelled before offset {}", offset.unwrap_or(0));
                return Err(SlideError::Cancelled);
            }

            let request = self.request.clone().query_opt(OFFSET_PARAM, offset);
            let raw = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    debug!("listing cancelled at offset {}", offset.unwrap_or(0));
                    return Err(SlideError::Cancelled);
                }
                raw = self.client.execute(request) => raw?,
            };
            let page: ListResponse<T> = response::decode(&raw, StatusCode::OK)?;

            received += page.data.len() as u64;
            debug!(
                "page at offset {}: {} items ({} of {:?})",
                offset.unwrap_or(0),
                page.data.len(),
                received,
                page.pagination.total
            );

            let next = next_offset(&page.pagination, offset.unwrap_or(0), received);
            consumer(page)?;

            match next? {
                Some(next) => offset = Some(next),
                None => return Ok(()),
            }
        }
    }
}

/// Offset of the page after `current`, or `None` when the listing is done.
fn next_offset(pagination: &Pagination, current: u64, received: u64) -> SlideResult<Option<u64>> {
    let Some(next) = pagination.next_offset else {
        return Ok(None);
    };
    if pagination.total.is_some_and(|total| received >= total) {
        return Ok(None);
    }
    if next <= current {
        warn!("server returned next_offset {next} after offset {current}");
        return Err(SlideError::Protocol(format!(
            "next_offset {next} does not advance past offset {current}"
        )));
    }
    Ok(Some(next))
}
