//! Error types for the Box Office REST clients.
//!
//! [`ApiException`] is built from a failed [`ApiResponse`](crate::api::ApiResponse)
//! only when the caller unwraps it. Local validation failures never reach the
//! network and surface as [`ApiError::InvalidParameter`].

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::api::context::{RequestEcho, ResponseContext};

/// Message used by the context variant when there are no errors.
pub const DEFAULT_EXCEPTION_MESSAGE: &str = "API exception occurred";

/// SDK error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a bad response.
    #[error("{0}")]
    Api(#[from] ApiException),

    /// Invalid parameter provided; raised before any request is sent.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A good response whose payload did not match the expected type.
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Client could not be configured.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// HTTP status of the failed call, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// The mapped exception, if this is a service failure.
    pub fn exception(&self) -> Option<&ApiException> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// How the message falls back when there are no errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageFallback {
    /// Fixed [`DEFAULT_EXCEPTION_MESSAGE`].
    Default,
    /// The raw status description.
    StatusDescription,
}

/// Diagnosable error for a failed service call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiException {
    pub status_code: u16,
    pub status_description: String,
    errors: Vec<String>,
    details: Option<Map<String, Value>>,
    fallback: MessageFallback,
}

impl ApiException {
    /// Build from the response context, with the fixed default message.
    pub fn from_context(
        status_code: u16,
        status_description: impl Into<String>,
        context: Option<&ResponseContext>,
        echo: Option<&RequestEcho>,
    ) -> Self {
        Self::with_warnings(status_code, status_description, context, echo, &[])
    }

    /// Like [`from_context`](Self::from_context), additionally folding in
    /// `info` entries whose code is in `warning_codes`. Matched entries are
    /// appended after the errors in response order; unmatched ones are dropped.
    pub fn with_warnings(
        status_code: u16,
        status_description: impl Into<String>,
        context: Option<&ResponseContext>,
        echo: Option<&RequestEcho>,
        warning_codes: &[&str],
    ) -> Self {
        let status_description = status_description.into();
        let errors = collect_errors(&status_description, context, warning_codes);
        Self {
            status_code,
            status_description,
            errors,
            details: echo.map(collect_details),
            fallback: MessageFallback::Default,
        }
    }

    /// Build without the default message: falls back to the status description.
    pub fn from_status(
        status_code: u16,
        status_description: impl Into<String>,
        context: Option<&ResponseContext>,
        echo: Option<&RequestEcho>,
    ) -> Self {
        Self {
            fallback: MessageFallback::StatusDescription,
            ..Self::from_context(status_code, status_description, context, echo)
        }
    }

    /// Error messages in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Errors joined with `"; "`, or the fallback when there are none.
    pub fn message(&self) -> String {
        if self.errors.is_empty() {
            return match self.fallback {
                MessageFallback::Default => DEFAULT_EXCEPTION_MESSAGE.to_string(),
                MessageFallback::StatusDescription => self.status_description.clone(),
            };
        }
        self.errors.join("; ")
    }

    /// Echo of the request: `body`, then query entries, then url params.
    /// `None` when the response carried no echo.
    pub fn details(&self) -> Option<&Map<String, Value>> {
        self.details.as_ref()
    }
}

impl fmt::Display for ApiException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ApiException {}

fn collect_errors(
    status_description: &str,
    context: Option<&ResponseContext>,
    warning_codes: &[&str],
) -> Vec<String> {
    let Some(context) = context else {
        return vec![status_description.to_string()];
    };

    let warnings = context
        .info
        .iter()
        .filter(|info| warning_codes.contains(&info.code.as_str()))
        .map(|info| info.message.clone());

    context
        .errors
        .iter()
        .map(|e| e.message.clone())
        .chain(warnings)
        .collect()
}

fn collect_details(echo: &RequestEcho) -> Map<String, Value> {
    let mut details = Map::new();
    if let Some(body) = &echo.body {
        details.insert("body".to_string(), body.clone());
    }
    for (key, value) in echo.query.iter().flatten() {
        details.insert(key.clone(), value.clone());
    }
    for (key, value) in echo.url_params.iter().flatten() {
        details.insert(key.clone(), value.clone());
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::context::{ContextError, ContextInfo};
    use serde_json::json;

    fn error(message: &str) -> ContextError {
        ContextError {
            message: message.to_string(),
            ..ContextError::default()
        }
    }

    fn info(code: &str, message: &str) -> ContextInfo {
        ContextInfo {
            message: message.to_string(),
            code: code.to_string(),
            kind: "warning".to_string(),
            name: String::new(),
        }
    }

    #[test]
    fn test_errors_without_context_is_status_description() {
        let e = ApiException::from_context(500, "Internal Server Error", None, None);
        assert_eq!(e.errors(), ["Internal Server Error"]);
        assert_eq!(e.message(), "Internal Server Error");
    }

    #[test]
    fn test_errors_empty_context_errors() {
        let ctx = ResponseContext::default();
        let e = ApiException::from_context(400, "Bad Request", Some(&ctx), None);
        assert!(e.errors().is_empty());
        assert_eq!(e.message(), DEFAULT_EXCEPTION_MESSAGE);
    }

    #[test]
    fn test_errors_keep_order_and_join() {
        let ctx = ResponseContext {
            errors: vec![error("first"), error("second")],
            info: vec![],
        };
        let e = ApiException::from_context(400, "Bad Request", Some(&ctx), None);
        assert_eq!(e.errors(), ["first", "second"]);
        assert_eq!(e.message(), "first; second");
        assert_eq!(e.to_string(), "first; second");
    }

    #[test]
    fn test_status_variant_falls_back_to_status_description() {
        let ctx = ResponseContext::default();
        let e = ApiException::from_status(404, "Not Found", Some(&ctx), None);
        assert!(e.errors().is_empty());
        assert_eq!(e.message(), "Not Found");
    }

    #[test]
    fn test_warnings_appended_after_errors_in_response_order() {
        let ctx = ResponseContext {
            errors: vec![error("hard")],
            info: vec![
                info("invalidCoupon", "coupon expired"),
                info("other", "ignored"),
                info("notValidPromotion", "promotion closed"),
            ],
        };
        let e = ApiException::with_warnings(
            400,
            "Bad Request",
            Some(&ctx),
            None,
            &["notValidPromotion", "invalidCoupon"],
        );
        assert_eq!(e.errors(), ["hard", "coupon expired", "promotion closed"]);
    }

    #[test]
    fn test_warnings_only() {
        let ctx = ResponseContext {
            errors: vec![],
            info: vec![info("invalidCoupon", "coupon expired")],
        };
        let e = ApiException::with_warnings(400, "Bad Request", Some(&ctx), None, &["invalidCoupon"]);
        assert_eq!(e.message(), "coupon expired");
    }

    #[test]
    fn test_details_merge() {
        let echo = RequestEcho {
            body: Some(json!("X")),
            query: Some(json!({"a": "1"}).as_object().cloned().unwrap()),
            url_params: Some(json!({"b": "2"}).as_object().cloned().unwrap()),
        };
        let e = ApiException::from_context(400, "Bad Request", None, Some(&echo));
        let details = e.details().unwrap();
        assert_eq!(Value::Object(details.clone()), json!({"body": "X", "a": "1", "b": "2"}));
    }

    #[test]
    fn test_details_url_params_coexist_with_query() {
        let echo = RequestEcho {
            body: None,
            query: Some(json!({"productId": "1001"}).as_object().cloned().unwrap()),
            url_params: Some(json!({"promoId": "7"}).as_object().cloned().unwrap()),
        };
        let e = ApiException::from_context(400, "Bad Request", None, Some(&echo));
        let details = e.details().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["productId"], json!("1001"));
        assert_eq!(details["promoId"], json!("7"));
    }

    #[test]
    fn test_details_keep_body_query_url_param_order() {
        let echo = RequestEcho {
            body: Some(json!({"channelId": "web"})),
            query: Some(json!({"zeta": "1"}).as_object().cloned().unwrap()),
            url_params: Some(json!({"alpha": "2"}).as_object().cloned().unwrap()),
        };
        let e = ApiException::from_context(400, "Bad Request", None, Some(&echo));
        let keys: Vec<_> = e.details().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["body", "zeta", "alpha"]);
    }

    #[test]
    fn test_details_none_without_echo() {
        let e = ApiException::from_context(400, "Bad Request", None, None);
        assert!(e.details().is_none());
    }

    #[test]
    fn test_details_empty_echo() {
        let e = ApiException::from_context(400, "Bad Request", None, Some(&RequestEcho::default()));
        assert_eq!(e.details().map(Map::len), Some(0));
    }

    #[test]
    fn test_api_error_display_and_status() {
        let err = ApiError::from(ApiException::from_context(503, "Service Unavailable", None, None));
        assert_eq!(err.to_string(), "Service Unavailable");
        assert_eq!(err.status_code(), Some(503));
        assert!(err.exception().is_some());

        let err = ApiError::InvalidParameter("reference cannot be empty".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: reference cannot be empty");
        assert_eq!(err.status_code(), None);
    }
}
