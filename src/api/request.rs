//! Request parameters: a plain description of one outbound call.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};

/// HTTP verb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialization format of the request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DataFormat {
    #[default]
    Json,
    Xml,
}

impl DataFormat {
    /// Content type sent with a body in this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

/// Unrecognised names fall back to JSON.
impl FromStr for DataFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "xml" => Self::Xml,
            _ => Self::Json,
        })
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized with serde_json when the request is built.
    Json(serde_json::Value),
    /// Sent verbatim (e.g. a pre-serialized XML document).
    Raw(String),
}

impl RequestBody {
    /// Serialize any value into a JSON body.
    pub fn json<B: Serialize>(body: &B) -> ApiResult<Self> {
        serde_json::to_value(body)
            .map(Self::Json)
            .map_err(|e| ApiError::InvalidParameter(format!("Unserializable request body: {}", e)))
    }

    /// Wire text of the body.
    pub fn to_text(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Raw(text) => text.clone(),
        }
    }
}

/// Everything needed to describe one REST call.
///
/// Built fresh per call through [`RequestParameters::builder`] and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParameters {
    base_url: String,
    path: String,
    method: Method,
    headers: Vec<(String, String)>,
    query: BTreeMap<String, String>,
    url_segments: BTreeMap<String, String>,
    body: Option<RequestBody>,
    format: DataFormat,
}

impl RequestParameters {
    /// Start a builder for `method` on `base_url` + `path`.
    ///
    /// `path` may contain `{name}` placeholders filled from
    /// [`RequestParametersBuilder::segment`].
    pub fn builder(
        method: Method,
        base_url: impl Into<String>,
        path: impl Into<String>,
    ) -> RequestParametersBuilder {
        RequestParametersBuilder {
            params: RequestParameters {
                base_url: base_url.into().trim_end_matches('/').to_string(),
                path: path.into(),
                method,
                headers: Vec::new(),
                query: BTreeMap::new(),
                url_segments: BTreeMap::new(),
                body: None,
                format: DataFormat::Json,
            },
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn url_segments(&self) -> &BTreeMap<String, String> {
        &self.url_segments
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    pub fn format(&self) -> DataFormat {
        self.format
    }
}

/// Builder for [`RequestParameters`].
#[derive(Debug, Clone)]
pub struct RequestParametersBuilder {
    params: RequestParameters,
}

impl RequestParametersBuilder {
    /// Append a header. Order is preserved.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.headers.push((name.into(), value.into()));
        self
    }

    /// Set a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.query.insert(name.into(), value.to_string());
        self
    }

    /// Set a query parameter only when a value is present.
    pub fn query_opt<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    /// Fill the `{name}` placeholder of the path.
    pub fn segment(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.url_segments.insert(name.into(), value.to_string());
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.params.body = Some(body);
        self
    }

    /// Serialize `body` as JSON.
    pub fn json_body<B: Serialize>(self, body: &B) -> ApiResult<Self> {
        Ok(self.body(RequestBody::json(body)?))
    }

    pub fn format(mut self, format: DataFormat) -> Self {
        self.params.format = format;
        self
    }

    pub fn build(self) -> RequestParameters {
        self.params
    }
}
