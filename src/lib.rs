//! # Box Office Rust SDK
//!
//! A typed client for the Box Office REST services: basket, checkout,
//! payment, pricing, inventory, venue and content.
//!
//! ## Modules
//!
//! - [`api`]: request parameters, execution, response classification and
//!   error mapping, plus the request/response models
//! - [`services`]: one client per service
//! - [`client`]: [`BoxOfficeClient`](client::BoxOfficeClient), the entry point
//! - [`config`]: [`ApiContext`](config::ApiContext), shared configuration
//! - [`auth`]: credentials and authenticator selection
//! - [`network`]: environments and service base URLs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use boxoffice_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let context = ApiContext::builder()
//!         .environment(Environment::Qa)
//!         .credentials(Credentials::basic("user", "secret"))
//!         .build()?;
//!     let client = BoxOfficeClient::new(context);
//!
//!     let products = client.inventory().search_products("wicked").await?;
//!     println!("Found {} products", products.len());
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core request path and models.
pub mod api;

/// Credentials and authenticator selection.
pub mod auth;

/// Top-level client.
pub mod client;

/// Shared configuration for all service clients.
pub mod config;

/// Environment and service URL resolution.
pub mod network;

/// Per-service clients.
pub mod services;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use boxoffice_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiException, ApiResponse, ApiResult, DataFormat, Method, RawResponse,
        RequestBody, RequestParameters, Transport, TransportRequest,
    };
    #[cfg(feature = "http")]
    pub use crate::api::ReqwestTransport;

    pub use crate::auth::{AuthMode, Credentials};
    pub use crate::client::BoxOfficeClient;
    pub use crate::config::{ApiContext, ApiContextBuilder, ApiErrorEvent};
    pub use crate::network::{Environment, Service};
    pub use crate::services::{
        BasketServiceClient, CheckoutServiceClient, ContentServiceClient,
        InventoryServiceClient, PaymentServiceClient, PricingServiceClient, VenueServiceClient,
    };
}
