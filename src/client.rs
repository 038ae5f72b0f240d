//! High-level client, [`BoxOfficeClient`], with one sub-client per service.
//!
//! Every sub-client shares a [`ServiceCore`], which runs the request path:
//! parameters → [`ClientWrapper`] → [`Executor`] → [`ApiResponse`].

use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, ApiResult};
use crate::api::executor::Executor;
use crate::api::request::{Method, RequestParameters, RequestParametersBuilder};
use crate::api::result::ApiResponse;
use crate::api::wrapper::ClientWrapper;
use crate::config::{ApiContext, ApiErrorEvent};
use crate::network::Service;
use crate::services::basket::BasketServiceClient;
use crate::services::checkout::CheckoutServiceClient;
use crate::services::content::ContentServiceClient;
use crate::services::inventory::InventoryServiceClient;
use crate::services::payment::PaymentServiceClient;
use crate::services::pricing::PricingServiceClient;
use crate::services::venue::VenueServiceClient;

/// Request path shared by the service clients.
#[derive(Debug, Clone)]
pub struct ServiceCore {
    service: Service,
    context: ApiContext,
    wrapper: ClientWrapper,
    executor: Executor,
}

impl ServiceCore {
    pub fn new(service: Service, context: ApiContext) -> Self {
        let wrapper = ClientWrapper::new(context.default_headers());
        let executor = Executor::new(context.transport());
        Self {
            service,
            context,
            wrapper,
            executor,
        }
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn context(&self) -> &ApiContext {
        &self.context
    }

    pub fn base_url(&self) -> String {
        self.context.base_url(self.service)
    }

    /// Start building parameters for `path` on this service.
    pub fn request(&self, method: Method, path: &str) -> RequestParametersBuilder {
        RequestParameters::builder(method, self.base_url(), path)
    }

    /// Run a call and keep the outcome wrapped.
    pub async fn execute<T: DeserializeOwned>(&self, params: RequestParameters) -> ApiResponse<T> {
        let credentials = self.context.credentials().await;
        let request = self.wrapper.build_request(&credentials, &params);

        tracing::debug!(
            service = %self.service,
            method = %request.method,
            url = %request.url(),
            "Sending request"
        );
        let raw = self.executor.execute(&request).await;

        if !raw.is_good() {
            tracing::warn!(
                service = %self.service,
                status = raw.status_code,
                url = %request.url(),
                "Request failed: {}",
                raw.status_description
            );
            self.context.report_error(&ApiErrorEvent {
                service: self.service,
                method: request.method,
                url: request.url(),
                status_code: raw.status_code,
                status_description: raw.status_description.clone(),
            });
        }

        ApiResponse::from_raw(raw)
    }

    /// Run a call and unwrap it.
    pub async fn call<T: DeserializeOwned>(&self, params: RequestParameters) -> ApiResult<T> {
        self.execute(params).await.data_or_error()
    }
}

/// Reject empty or whitespace-only required arguments.
pub(crate) fn validate_not_blank(value: &str, field_name: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidParameter(format!(
            "{} cannot be empty",
            field_name
        )));
    }
    Ok(())
}

/// Reject zero quantities.
pub(crate) fn validate_quantity(quantity: u32) -> ApiResult<()> {
    if quantity == 0 {
        return Err(ApiError::InvalidParameter(
            "quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// The primary entry point of the SDK.
///
/// ```rust,ignore
/// use boxoffice_sdk::prelude::*;
///
/// let client = BoxOfficeClient::new(ApiContext::from_env()?);
/// let basket = client.basket().get_basket("123456").await?;
/// ```
#[derive(Debug, Clone)]
pub struct BoxOfficeClient {
    context: ApiContext,
}

impl BoxOfficeClient {
    pub fn new(context: ApiContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ApiContext {
        &self.context
    }

    pub fn basket(&self) -> BasketServiceClient {
        BasketServiceClient::new(self.context.clone())
    }

    pub fn checkout(&self) -> CheckoutServiceClient {
        CheckoutServiceClient::new(self.context.clone())
    }

    pub fn payment(&self) -> PaymentServiceClient {
        PaymentServiceClient::new(self.context.clone())
    }

    pub fn pricing(&self) -> PricingServiceClient {
        PricingServiceClient::new(self.context.clone())
    }

    pub fn inventory(&self) -> InventoryServiceClient {
        InventoryServiceClient::new(self.context.clone())
    }

    pub fn venue(&self) -> VenueServiceClient {
        VenueServiceClient::new(self.context.clone())
    }

    pub fn content(&self) -> ContentServiceClient {
        ContentServiceClient::new(self.context.clone())
    }
}
