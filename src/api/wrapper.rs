//! Client wrapper: turns [`RequestParameters`] into a [`TransportRequest`].

use crate::api::request::RequestParameters;
use crate::api::transport::{TransportBody, TransportRequest};
use crate::auth::Credentials;

/// Builds transport requests for one client context. Performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct ClientWrapper {
    default_headers: Vec<(String, String)>,
}

impl ClientWrapper {
    /// Wrapper that adds `default_headers` to every request unless the
    /// request sets a header of the same name.
    pub fn new(default_headers: Vec<(String, String)>) -> Self {
        Self { default_headers }
    }

    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Build the transport request for `params`, authenticated per `credentials`.
    pub fn build_request(
        &self,
        credentials: &Credentials,
        params: &RequestParameters,
    ) -> TransportRequest {
        let mut headers: Vec<(String, String)> = params.headers().to_vec();
        for (name, value) in &self.default_headers {
            let overridden = headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(name));
            if !overridden {
                headers.push((name.clone(), value.clone()));
            }
        }

        let body = params.body().map(|body| TransportBody {
            content_type: params.format().content_type().to_string(),
            content: body.to_text(),
        });

        TransportRequest {
            base_url: params.base_url().to_string(),
            path: params.path().to_string(),
            method: params.method(),
            headers,
            url_segments: params.url_segments().clone(),
            query: params.query().clone(),
            body,
            authenticator: credentials.authenticator(),
        }
    }
}
