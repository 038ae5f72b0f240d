//! Raw transport responses and the good/bad classifier.

/// Status codes treated as a good response.
///
/// Narrower than "2xx/3xx": 201, 202, 203, 205, 206 and 303 are bad,
/// while 402 is good.
pub const GOOD_STATUS_CODES: [u16; 8] = [200, 204, 300, 301, 302, 305, 307, 402];

/// Response as produced by a [`Transport`](crate::api::transport::Transport).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status, `0` when no response was received.
    pub status_code: u16,
    pub status_description: String,
    /// Transport-level failure (connection refused, timeout, ...).
    pub error_exception: Option<String>,
    pub error_message: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    /// A response with a status and body.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            status_description: status_description(status_code),
            body: body.into(),
            ..Self::default()
        }
    }

    /// A response for a request that never got an HTTP status back.
    pub fn transport_failure(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            status_code: 0,
            status_description: error.clone(),
            error_exception: Some(error.clone()),
            error_message: Some(error),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_good(&self) -> bool {
        is_good_response(self)
    }
}

/// Classify a response.
///
/// Good iff there is no transport exception, no non-empty error message and
/// the status is one of [`GOOD_STATUS_CODES`].
pub fn is_good_response(response: &RawResponse) -> bool {
    if response.error_exception.is_some() {
        return false;
    }
    if response
        .error_message
        .as_deref()
        .is_some_and(|m| !m.is_empty())
    {
        return false;
    }
    GOOD_STATUS_CODES.contains(&response.status_code)
}

/// Description for a status code: its reason phrase, or `HTTP <code>` when
/// the code has none.
pub fn status_description(status_code: u16) -> String {
    match canonical_reason(status_code) {
        "" => format!("HTTP {}", status_code),
        reason => reason.to_string(),
    }
}

/// Reason phrase for the status codes these services return.
pub fn canonical_reason(status_code: u16) -> &'static str {
    match status_code {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}
