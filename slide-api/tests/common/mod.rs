//! Shared test utilities for integration tests.
//!
//! `ScriptedTransport` replays a fixed queue of exchanges. Each exchange
//! checks the outgoing request (method, path, query, optional JSON body) and
//! answers with a canned response. Exchanges are consumed strictly in order;
//! an extra request or an exchange left unconsumed fails the test.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use slide_api::{ApiRequest, ClientConfig, Method, RawResponse, SlideClient, SlideResult, Transport};

pub const TEST_TOKEN: &str = "fakeToken";

/// Read a file under `tests/testdata`.
pub fn fixture(relative: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// Parse an RFC 3339 timestamp for expected values.
pub fn rfc3339(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap_or_else(|e| panic!("bad timestamp {value}: {e}"))
        .with_timezone(&Utc)
}

/// What the scripted transport answers with.
pub enum Reply {
    /// Status plus a body read from `tests/testdata/<path>`.
    File { status: u16, path: &'static str },
    /// Status with an empty body.
    NoContent { status: u16 },
}

/// What the next request must look like.
pub struct ExpectedRequest {
    pub method: Method,
    pub path: String,
    /// Compared as a multiset; `Vec::new()` means no query parameters at all.
    pub query: Vec<(&'static str, String)>,
    /// Fixture under `tests/testdata` holding the expected JSON body.
    pub body: Option<&'static str>,
}

impl ExpectedRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn body(mut self, fixture_path: &'static str) -> Self {
        self.body = Some(fixture_path);
        self
    }
}

pub struct Exchange {
    reply: Reply,
    expected: ExpectedRequest,
}

/// Queue one exchange: validate the request against `expected`, then answer with `reply`.
pub fn serve_and_validate(reply: Reply, expected: ExpectedRequest) -> Exchange {
    Exchange { reply, expected }
}

pub struct ScriptedTransport {
    queue: Mutex<VecDeque<Exchange>>,
    served: Mutex<usize>,
}

impl ScriptedTransport {
    pub fn new(exchanges: Vec<Exchange>) -> Arc<Self> {
        Arc::new(Self {
            queue: Mutex::new(exchanges.into()),
            served: Mutex::new(0),
        })
    }

    pub fn served(&self) -> usize {
        *self.served.lock().unwrap()
    }

    fn validate(expected: &ExpectedRequest, request: &ApiRequest, index: usize) {
        assert_eq!(
            request.method(),
            &expected.method,
            "request #{index}: method mismatch"
        );
        assert_eq!(request.path(), expected.path, "request #{index}: path mismatch");

        let mut actual_query: Vec<(String, String)> = request.query().to_vec();
        let mut expected_query: Vec<(String, String)> = expected
            .query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        actual_query.sort();
        expected_query.sort();
        assert_eq!(actual_query, expected_query, "request #{index}: query mismatch");

        assert_eq!(
            request.header("authorization"),
            Some(format!("Bearer {TEST_TOKEN}").as_str()),
            "request #{index}: missing bearer token"
        );

        match expected.body {
            Some(path) => {
                let want: serde_json::Value = serde_json::from_str(&fixture(path))
                    .unwrap_or_else(|e| panic!("bad request fixture {path}: {e}"));
                let got: serde_json::Value = serde_json::from_str(
                    request
                        .body()
                        .unwrap_or_else(|| panic!("request #{index}: expected a body")),
                )
                .unwrap_or_else(|e| panic!("request #{index}: body is not JSON: {e}"));
                assert_eq!(got, want, "request #{index}: body mismatch");
            }
            None => assert!(
                request.body().is_none(),
                "request #{index}: unexpected body {:?}",
                request.body()
            ),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> SlideResult<RawResponse> {
        let index = {
            let mut served = self.served.lock().unwrap();
            *served += 1;
            *served
        };
        let exchange = self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("request #{index} was not scripted: {request:?}"));

        Self::validate(&exchange.expected, &request, index);

        Ok(match exchange.reply {
            Reply::File { status, path } => RawResponse::new(status, fixture(path)),
            Reply::NoContent { status } => RawResponse::empty(status),
        })
    }
}

impl Drop for ScriptedTransport {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        let remaining = self.queue.get_mut().map(|q| q.len()).unwrap_or(0);
        assert_eq!(remaining, 0, "{remaining} scripted exchange(s) were never requested");
    }
}

/// A client whose requests are answered by `exchanges`, in order.
pub fn test_service(exchanges: Vec<Exchange>) -> SlideClient {
    SlideClient::with_transport(ClientConfig::new(TEST_TOKEN), ScriptedTransport::new(exchanges))
        .expect("failed to build test client")
}

/// Like `test_service`, but keeps a handle on the transport for call counting.
pub fn test_service_with_transport(exchanges: Vec<Exchange>) -> (SlideClient, Arc<ScriptedTransport>) {
    let transport = ScriptedTransport::new(exchanges);
    let client = SlideClient::with_transport(ClientConfig::new(TEST_TOKEN), transport.clone())
        .expect("failed to build test client");
    (client, transport)
}
