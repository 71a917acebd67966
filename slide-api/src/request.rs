//! Request descriptors.
//!
//! Every call builds a fresh `ApiRequest` from a `RequestBuilder`: the static
//! resource path, optional identifier segments, query pairs and JSON body.
//! `build` attaches the bearer token, default headers and API origin from the
//! client configuration. The resulting descriptor is plain data so any
//! `Transport` can execute or inspect it.

use std::fmt;

use reqwest::{Method, Url};
use serde::Serialize;

use slide_core::config::ClientConfig;
use slide_core::error::{SlideError, SlideResult};

/// A fully-described HTTP request, immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    base_url: String,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl ApiRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// API origin the request is sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Decoded request path, e.g. `/v1/agent/a_0123456789ab`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Query pairs in insertion order. Empty when the call has no parameters.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Serialized JSON body, if the operation sends one.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Compose the absolute URL: origin, percent-encoded path segments, query.
    pub fn url(&self) -> SlideResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SlideError::Config(format!("invalid base_url {:?}: {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|_| SlideError::Config(format!("base_url {:?} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(&self.segments);

        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case("authorization") {
                    (k.as_str(), "<redacted>")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("base_url", &self.base_url)
            .field("path", &self.path())
            .field("query", &self.query)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// Builder for an `ApiRequest`.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<String>,
    invalid: Option<String>,
}

impl RequestBuilder {
    /// Start a request for a static resource path such as `/v1/agent`.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: Vec::new(),
            body: None,
            invalid: None,
        }
    }

    /// Append a path segment, typically a resource identifier.
    ///
    /// A blank segment would address the parent collection instead, so it
    /// makes [`RequestBuilder::build`] fail.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        let segment = segment.into();
        if segment.trim().is_empty() && self.invalid.is_none() {
            let parent = self.segments.join("/");
            self.invalid = Some(format!("empty path segment after /{parent}"));
        }
        self.segments.push(segment);
        self
    }

    /// Append a query pair.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query pair only when a value is present.
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Serialize `payload` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, payload: &B) -> SlideResult<Self> {
        let body = serde_json::to_string(payload)
            .map_err(|e| SlideError::Serialization(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Attach auth, default headers and the API origin.
    pub fn build(self, config: &ClientConfig) -> SlideResult<ApiRequest> {
        if let Some(reason) = self.invalid {
            return Err(SlideError::InvalidArgument(reason));
        }

        let mut headers = vec![
            ("authorization".to_string(), format!("Bearer {}", config.token)),
            ("accept".to_string(), "application/json".to_string()),
            ("user-agent".to_string(), config.user_agent.clone()),
        ];
        if self.body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        Ok(ApiRequest {
            method: self.method,
            base_url: config.base_url.clone(),
            segments: self.segments,
            query: self.query,
            headers,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("fakeToken").with_base_url("https://api.slide.tech")
    }

    #[test]
    fn test_build_list_request() {
        let req = RequestBuilder::new(Method::GET, "/v1/agent").build(&config()).unwrap();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.path(), "/v1/agent");
        assert!(req.query().is_empty());
        assert!(req.body().is_none());
        assert!(req.header("content-type").is_none());
        assert_eq!(req.url().unwrap().as_str(), "https://api.slide.tech/v1/agent");
    }

    #[test]
    fn test_bearer_token_attached() {
        let req = RequestBuilder::new(Method::GET, "/v1/backup").build(&config()).unwrap();
        assert_eq!(req.header("Authorization"), Some("Bearer fakeToken"));
        assert_eq!(req.header("accept"), Some("application/json"));
    }

    #[test]
    fn test_segment_and_query() {
        let req = RequestBuilder::new(Method::GET, "/v1/restore/file")
            .segment("fr_0123456789ab")
            .segment("browse")
            .query("offset", 1)
            .build(&config())
            .unwrap();
        assert_eq!(req.path(), "/v1/restore/file/fr_0123456789ab/browse");
        assert_eq!(req.query(), &[("offset".to_string(), "1".to_string())]);
        assert_eq!(
            req.url().unwrap().as_str(),
            "https://api.slide.tech/v1/restore/file/fr_0123456789ab/browse?offset=1"
        );
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        let req = RequestBuilder::new(Method::GET, "/v1/agent")
            .segment("a b/c")
            .query("path", "C:/Users/x y")
            .build(&config())
            .unwrap();
        assert_eq!(req.path(), "/v1/agent/a b/c");
        assert_eq!(
            req.url().unwrap().as_str(),
            "https://api.slide.tech/v1/agent/a%20b%2Fc?path=C%3A%2FUsers%2Fx+y"
        );
    }

    #[test]
    fn test_base_url_with_prefix() {
        let config = ClientConfig::new("t").with_base_url("http://127.0.0.1:8080/proxy/");
        let req = RequestBuilder::new(Method::DELETE, "/v1/restore/file")
            .segment("fr_1")
            .build(&config)
            .unwrap();
        assert_eq!(
            req.url().unwrap().as_str(),
            "http://127.0.0.1:8080/proxy/v1/restore/file/fr_1"
        );
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = RequestBuilder::new(Method::PATCH, "/v1/agent")
            .segment("a_1")
            .json(&serde_json::json!({ "display_name": "renamed" }))
            .unwrap()
            .build(&config())
            .unwrap();
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.body(), Some(r#"{"display_name":"renamed"}"#));
    }

    #[test]
    fn test_query_opt_skips_none() {
        let req = RequestBuilder::new(Method::GET, "/v1/agent")
            .query_opt("path", None::<&str>)
            .build(&config())
            .unwrap();
        assert!(req.query().is_empty());
    }

    #[test]
    fn test_debug_redacts_authorization() {
        let req = RequestBuilder::new(Method::GET, "/v1/agent").build(&config()).unwrap();
        let rendered = format!("{req:?}");
        assert!(!rendered.contains("fakeToken"));
    }

    #[test]
    fn test_blank_segment_is_rejected() {
        for id in ["", "   "] {
            let err = RequestBuilder::new(Method::GET, "/v1/agent")
                .segment(id)
                .build(&config())
                .unwrap_err();
            assert!(matches!(err, SlideError::InvalidArgument(ref m) if m.contains("/v1/agent")));
        }
    }
}
