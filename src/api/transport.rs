//! Transport boundary.
//!
//! The core never opens connections itself. It hands a [`TransportRequest`]
//! to an injected [`Transport`] and gets a [`RawResponse`] back; transport
//! failures are reported inside the response, never as an `Err`.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::api::request::Method;
use crate::api::response::RawResponse;
#[cfg(feature = "http")]
use crate::api::response::status_description;
use crate::auth::Authenticator;

/// Body of a transport request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportBody {
    pub content_type: String,
    pub content: String,
}

/// A fully resolved request, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub base_url: String,
    /// Path template, `{name}` placeholders resolved from `url_segments`.
    pub path: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub url_segments: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    pub body: Option<TransportBody>,
    pub authenticator: Option<Authenticator>,
}

impl TransportRequest {
    /// Path with every `{name}` placeholder replaced by its percent-encoded segment.
    pub fn resolved_path(&self) -> String {
        let mut path = self.path.clone();
        for (name, value) in &self.url_segments {
            path = path.replace(&format!("{{{}}}", name), &urlencoding::encode(value));
        }
        path
    }

    /// Absolute URL including the query string.
    pub fn url(&self) -> String {
        let path = self.resolved_path();
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !self.query.is_empty() {
            // BTreeMap<String, String> always encodes.
            let query = serde_urlencoded::to_string(&self.query).unwrap_or_default();
            url = format!("{}?{}", url, query);
        }
        url
    }

    /// Number of body parameters attached: 1 with a body, 0 without.
    pub fn body_parameter_count(&self) -> usize {
        usize::from(self.body.is_some())
    }

    /// All headers that go on the wire, including `Authorization`.
    pub fn wire_headers(&self) -> Vec<(String, String)> {
        let mut headers = self.headers.clone();
        if let Some(auth) = &self.authenticator {
            headers.push(("Authorization".to_string(), auth.header_value()));
        }
        if let Some(body) = &self.body {
            headers.push(("Content-Type".to_string(), body.content_type.clone()));
        }
        headers
    }
}

/// Executes requests. Implementations must not panic on network failure;
/// they report it through [`RawResponse::transport_failure`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &TransportRequest) -> RawResponse;
}

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// [`Transport`] backed by `reqwest`.
///
/// Redirects are not followed: 3xx responses are returned as-is so the
/// classifier sees them.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl ReqwestTransport {
    /// Build with the given timeout.
    pub fn new(timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &TransportRequest) -> RawResponse {
        let url = request.url();
        let mut builder = self.client.request(Self::method(request.method), url.as_str());
        for (name, value) in request.wire_headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.content.clone());
        }

        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, url = %url, "Transport failure");
                return RawResponse::transport_failure(e.to_string());
            }
        };

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();

        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read response body: {}", e);
                let mut raw = RawResponse::transport_failure(e.to_string());
                raw.status_code = status.as_u16();
                raw.headers = headers;
                return raw;
            }
        };

        RawResponse {
            status_code: status.as_u16(),
            status_description: status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status_description(status.as_u16())),
            error_exception: None,
            error_message: None,
            headers,
            body,
        }
    }
}
