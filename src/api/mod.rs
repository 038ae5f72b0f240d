//! Core request path shared by every service client.
//!
//! A call flows through four stages:
//!
//! 1. [`RequestParameters`] describe the call (URL template, query, body).
//! 2. [`ClientWrapper`] resolves it against the current credentials and
//!    default headers into a [`TransportRequest`].
//! 3. [`Executor`] sends it through the injected [`Transport`], retrying once
//!    when the response is not on the allow-list.
//! 4. [`ApiResponse`] wraps the raw response; [`ApiException`] describes a
//!    failed one.
//!
//! # Error Handling
//!
//! Every typed call returns `ApiResult<T>`, an alias for `Result<T, ApiError>`:
//!
//! ```rust,ignore
//! use boxoffice_sdk::api::ApiError;
//!
//! match client.basket().get_basket("123456").await {
//!     Ok(basket) => println!("{} tickets", basket.ticket_count()),
//!     Err(ApiError::Api(e)) => println!("{} ({}): {}", e.status_code, e.status_description, e),
//!     Err(ApiError::InvalidParameter(msg)) => println!("Rejected locally: {}", msg),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod context;
pub mod error;
pub mod executor;
pub mod request;
pub mod response;
pub mod result;
pub mod transport;
pub mod types;
pub mod wrapper;

// Re-export main types for convenience
pub use context::{ContextError, ContextInfo, RequestEcho, ResponseContext};
pub use error::{ApiError, ApiException, ApiResult, DEFAULT_EXCEPTION_MESSAGE};
pub use executor::{Executor, MAX_ATTEMPTS};
pub use request::{DataFormat, Method, RequestBody, RequestParameters, RequestParametersBuilder};
pub use response::{is_good_response, RawResponse, GOOD_STATUS_CODES};
pub use result::{ApiResponse, ListWrapper};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{Transport, TransportBody, TransportRequest};
pub use types::{Page, Price};
pub use wrapper::ClientWrapper;
