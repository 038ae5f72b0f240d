//! Response envelope: the `request` echo and the `context` error/info block.
//!
//! Every service body has the shape
//!
//! ```text
//! { "request": {...}, "response": <payload or "">, "context": { "errors": [...], "info": [...] } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One structured error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextError {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// One informational entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextInfo {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

/// The `context` block of a response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseContext {
    #[serde(default)]
    pub errors: Vec<ContextError>,
    #[serde(default)]
    pub info: Vec<ContextInfo>,
}

/// The `request` block of a response body, kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEcho {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_params: Option<Map<String, Value>>,
}

/// A response body split into its three parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    pub request: Option<RequestEcho>,
    pub response: Value,
    pub context: Option<ResponseContext>,
}

impl Envelope {
    /// Split a body.
    ///
    /// Bodies without a `response` key are taken whole as the payload. An
    /// empty or unparseable body yields a null payload with no context.
    pub fn parse(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        let value: Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(error = %e, "Response body is not JSON");
                return Self::default();
            }
        };

        let Value::Object(mut map) = value else {
            return Self {
                response: value,
                ..Self::default()
            };
        };

        let context = map
            .remove("context")
            .and_then(|c| serde_json::from_value::<ResponseContext>(c).ok());

        if !map.contains_key("response") {
            return Self {
                request: None,
                response: Value::Object(map),
                context,
            };
        }

        let request = map
            .remove("request")
            .and_then(|r| serde_json::from_value::<RequestEcho>(r).ok());
        let response = match map.remove("response") {
            // The services send "" for "no payload".
            Some(Value::String(s)) if s.is_empty() => Value::Null,
            Some(v) => v,
            None => Value::Null,
        };

        Self {
            request,
            response,
            context,
        }
    }
}
