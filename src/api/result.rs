//! [`ApiResponse`], a raw response bound to a typed outcome.

use serde::de::DeserializeOwned;

use crate::api::context::{Envelope, RequestEcho, ResponseContext};
use crate::api::error::{ApiError, ApiException, ApiResult};
use crate::api::response::{is_good_response, RawResponse};

/// Header the services use to echo the caller's correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Outcome of one call.
///
/// Data is exposed only for good responses. For bad ones the accessors build
/// an [`ApiException`] from the status, context and request echo every time
/// they are called.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    data: Option<T>,
    raw: RawResponse,
    context: Option<ResponseContext>,
    request_echo: Option<RequestEcho>,
    parse_error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(
        data: Option<T>,
        raw: RawResponse,
        context: Option<ResponseContext>,
        request_echo: Option<RequestEcho>,
    ) -> Self {
        Self {
            data,
            raw,
            context,
            request_echo,
            parse_error: None,
        }
    }

    /// True iff the raw response is classified good.
    pub fn is_successful(&self) -> bool {
        is_good_response(&self.raw)
    }

    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    pub fn status_code(&self) -> u16 {
        self.raw.status_code
    }

    pub fn context(&self) -> Option<&ResponseContext> {
        self.context.as_ref()
    }

    pub fn request_echo(&self) -> Option<&RequestEcho> {
        self.request_echo.as_ref()
    }

    /// Correlation id echoed back by the service.
    pub fn correlation_id(&self) -> Option<&str> {
        self.raw.header(CORRELATION_ID_HEADER)
    }

    /// Borrow the data of a good response.
    pub fn data(&self) -> Option<&T> {
        if self.is_successful() {
            self.data.as_ref()
        } else {
            None
        }
    }

    /// Data if successful, otherwise `T::default()`.
    pub fn data_or_default(self) -> T
    where
        T: Default,
    {
        if self.is_successful() {
            self.data.unwrap_or_default()
        } else {
            T::default()
        }
    }

    /// Data if successful, otherwise the mapped exception.
    pub fn data_or_error(self) -> ApiResult<T> {
        self.data_or_error_with_warnings(&[])
    }

    /// Like [`data_or_error`](Self::data_or_error), treating `info` entries
    /// with one of `warning_codes` as additional errors.
    pub fn data_or_error_with_warnings(self, warning_codes: &[&str]) -> ApiResult<T> {
        if !self.is_successful() {
            return Err(self.exception_with_warnings(warning_codes).into());
        }
        self.take_data()
    }

    /// Data if successful, otherwise an exception whose message falls back to
    /// the raw status description.
    pub fn data_or_raw_error(self) -> ApiResult<T> {
        if !self.is_successful() {
            return Err(ApiException::from_status(
                self.raw.status_code,
                self.raw.status_description.clone(),
                self.context.as_ref(),
                self.request_echo.as_ref(),
            )
            .into());
        }
        self.take_data()
    }

    /// The exception for this response, regardless of classification.
    pub fn exception(&self) -> ApiException {
        self.exception_with_warnings(&[])
    }

    fn exception_with_warnings(&self, warning_codes: &[&str]) -> ApiException {
        ApiException::with_warnings(
            self.raw.status_code,
            self.raw.status_description.clone(),
            self.context.as_ref(),
            self.request_echo.as_ref(),
            warning_codes,
        )
    }

    fn take_data(self) -> ApiResult<T> {
        match (self.data, self.parse_error) {
            (Some(data), _) => Ok(data),
            (None, Some(e)) => Err(ApiError::Deserialize(e)),
            (None, None) => Err(ApiError::Deserialize(
                "Response carried no payload".to_string(),
            )),
        }
    }

    /// Flatten a list-wrapper payload into its items, preserving order.
    pub fn into_list<I>(self) -> ApiResult<Vec<I>>
    where
        T: ListWrapper<I>,
    {
        self.data_or_error().map(ListWrapper::into_items)
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Parse a raw response's body envelope.
    ///
    /// Context and request echo are kept whatever the status. The payload is
    /// deserialized only for good responses.
    pub fn from_raw(raw: RawResponse) -> Self {
        let envelope = Envelope::parse(&raw.body);
        let mut response = Self::new(None, raw, envelope.context, envelope.request);

        if response.is_successful() {
            match serde_json::from_value::<T>(envelope.response) {
                Ok(data) => response.data = Some(data),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to deserialize response payload");
                    response.parse_error = Some(format!("Failed to deserialize response: {}", e));
                }
            }
        }
        response
    }
}

/// A payload that wraps a typed collection.
pub trait ListWrapper<I> {
    fn into_items(self) -> Vec<I>;
}

impl<I> ListWrapper<I> for Vec<I> {
    fn into_items(self) -> Vec<I> {
        self
    }
}

impl<I> ListWrapper<I> for Vec<Vec<I>> {
    fn into_items(self) -> Vec<I> {
        self.into_iter().flatten().collect()
    }
}
