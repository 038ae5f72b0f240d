//! Client configuration: [`ApiContext`] and its builder.
//!
//! One context is shared by every service client built from it. It owns the
//! credentials, the default headers, the transport and the optional error
//! observer.
//!
//! ```rust,ignore
//! use boxoffice_sdk::prelude::*;
//!
//! let context = ApiContext::builder()
//!     .environment(Environment::Staging)
//!     .credentials(Credentials::basic("agent", "secret"))
//!     .affiliate_id("boxoffice")
//!     .on_error(|event| eprintln!("{} {} failed: {}", event.method, event.url, event.status_code))
//!     .build()?;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_lock::RwLock;

use crate::api::error::{ApiError, ApiResult};
use crate::api::request::Method;
use crate::api::result::CORRELATION_ID_HEADER;
use crate::api::transport::{Transport, DEFAULT_TIMEOUT_SECS};
use crate::auth::{AuthMode, Credentials};
use crate::network::{Environment, Service};

/// Header carrying the affiliate id.
pub const AFFILIATE_ID_HEADER: &str = "affiliateId";

/// Environment variable names read by [`ApiContext::from_env`].
pub mod env_vars {
    pub const ENVIRONMENT: &str = "BOXOFFICE_ENVIRONMENT";
    pub const USERNAME: &str = "BOXOFFICE_USERNAME";
    pub const PASSWORD: &str = "BOXOFFICE_PASSWORD";
    pub const ACCESS_TOKEN: &str = "BOXOFFICE_ACCESS_TOKEN";
    pub const AUTH_MODE: &str = "BOXOFFICE_AUTH_MODE";
    pub const AFFILIATE_ID: &str = "BOXOFFICE_AFFILIATE_ID";
}

/// Describes a call whose final response was bad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorEvent {
    pub service: Service,
    pub method: Method,
    pub url: String,
    pub status_code: u16,
    pub status_description: String,
}

/// Callback invoked once per failed call.
pub type ErrorObserver = Arc<dyn Fn(&ApiErrorEvent) + Send + Sync>;

/// Shared configuration for the service clients.
#[derive(Clone)]
pub struct ApiContext {
    environment: Environment,
    credentials: Arc<RwLock<Credentials>>,
    affiliate_id: Option<String>,
    correlation_id: String,
    default_headers: Vec<(String, String)>,
    base_urls: HashMap<Service, String>,
    error_observer: Option<ErrorObserver>,
    transport: Arc<dyn Transport>,
}

impl ApiContext {
    pub fn builder() -> ApiContextBuilder {
        ApiContextBuilder::default()
    }

    /// Build a context from `BOXOFFICE_*` environment variables.
    ///
    /// Missing variables leave the builder defaults in place. Without an
    /// explicit auth mode, a token selects bearer and a username selects basic.
    pub fn from_env() -> ApiResult<Self> {
        Self::builder_from_env().build()
    }

    /// Builder pre-filled from `BOXOFFICE_*` environment variables.
    pub fn builder_from_env() -> ApiContextBuilder {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let username = var(env_vars::USERNAME).unwrap_or_default();
        let password = var(env_vars::PASSWORD).unwrap_or_default();
        let access_token = var(env_vars::ACCESS_TOKEN);
        let auth_mode = match var(env_vars::AUTH_MODE) {
            Some(mode) => mode.parse().unwrap_or_default(),
            None if access_token.is_some() => AuthMode::Bearer,
            None if !username.is_empty() => AuthMode::Basic,
            None => AuthMode::None,
        };

        let mut builder = Self::builder().credentials(Credentials {
            username,
            password,
            access_token,
            auth_mode,
        });
        if let Some(env) = var(env_vars::ENVIRONMENT) {
            builder = builder.environment(env.parse().unwrap_or_default());
        }
        if let Some(affiliate) = var(env_vars::AFFILIATE_ID) {
            builder = builder.affiliate_id(affiliate);
        }
        builder
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn affiliate_id(&self) -> Option<&str> {
        self.affiliate_id.as_deref()
    }

    /// Correlation id sent with every request.
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// Base URL for `service`: the override if set, otherwise the environment default.
    pub fn base_url(&self, service: Service) -> String {
        self.base_urls
            .get(&service)
            .cloned()
            .unwrap_or_else(|| service.base_url(self.environment))
    }

    /// Snapshot of the current credentials.
    pub async fn credentials(&self) -> Credentials {
        self.credentials.read().await.clone()
    }

    /// Replace the credentials. Calls already in flight keep their snapshot.
    pub async fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.write().await = credentials;
    }

    /// Swap the bearer token.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        self.credentials.write().await.access_token = Some(token.into());
    }

    pub async fn clear_access_token(&self) {
        self.credentials.write().await.access_token = None;
    }

    /// Headers added to every request, one entry per name (case-insensitive).
    ///
    /// A header set through [`ApiContextBuilder::header`] replaces the
    /// built-in one of the same name; a repeated name keeps the last value.
    pub fn default_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(
            CORRELATION_ID_HEADER.to_string(),
            self.correlation_id.clone(),
        )];
        if let Some(affiliate) = &self.affiliate_id {
            headers.push((AFFILIATE_ID_HEADER.to_string(), affiliate.clone()));
        }
        for (name, value) in &self.default_headers {
            match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
                Some(existing) => existing.1 = value.clone(),
                None => headers.push((name.clone(), value.clone())),
            }
        }
        headers
    }

    pub fn transport(&self) -> Arc<dyn Transport> {
        self.transport.clone()
    }

    /// Notify the observer, if any.
    pub fn report_error(&self, event: &ApiErrorEvent) {
        if let Some(observer) = &self.error_observer {
            observer(event);
        }
    }
}

impl fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiContext")
            .field("environment", &self.environment)
            .field("affiliate_id", &self.affiliate_id)
            .field("correlation_id", &self.correlation_id)
            .field("base_urls", &self.base_urls)
            .field("has_error_observer", &self.error_observer.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`ApiContext`].
pub struct ApiContextBuilder {
    environment: Environment,
    credentials: Credentials,
    affiliate_id: Option<String>,
    correlation_id: Option<String>,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    base_urls: HashMap<Service, String>,
    error_observer: Option<ErrorObserver>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for ApiContextBuilder {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            credentials: Credentials::anonymous(),
            affiliate_id: None,
            correlation_id: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
            base_urls: HashMap::new(),
            error_observer: None,
            transport: None,
        }
    }
}

impl ApiContextBuilder {
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn affiliate_id(mut self, affiliate_id: impl Into<String>) -> Self {
        self.affiliate_id = Some(affiliate_id.into());
        self
    }

    /// Fixed correlation id; a random UUID is used otherwise.
    pub fn correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Transport timeout (ignored when a custom transport is supplied).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Override the base URL of one service.
    pub fn base_url(mut self, service: Service, url: impl Into<String>) -> Self {
        self.base_urls
            .insert(service, url.into().trim_end_matches('/').to_string());
        self
    }

    /// Register the callback invoked for every failed call.
    pub fn on_error<F>(mut self, observer: F) -> Self
    where
        F: Fn(&ApiErrorEvent) + Send + Sync + 'static,
    {
        self.error_observer = Some(Arc::new(observer));
        self
    }

    /// Use a custom transport instead of the bundled reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> ApiResult<ApiContext> {
        let transport = match self.transport {
            Some(t) => t,
            None => default_transport(self.timeout)?,
        };

        for (name, _) in &self.default_headers {
            if name.trim().is_empty() {
                return Err(ApiError::Configuration("Header name cannot be empty".to_string()));
            }
        }

        // A correlation id given as a plain header is the one reported back.
        let header_correlation_id = self
            .default_headers
            .iter()
            .rev()
            .find(|(name, _)| name.eq_ignore_ascii_case(CORRELATION_ID_HEADER))
            .map(|(_, value)| value.clone());

        Ok(ApiContext {
            environment: self.environment,
            credentials: Arc::new(RwLock::new(self.credentials)),
            affiliate_id: self.affiliate_id,
            correlation_id: header_correlation_id
                .or(self.correlation_id)
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            default_headers: self.default_headers,
            base_urls: self.base_urls,
            error_observer: self.error_observer,
            transport,
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> ApiResult<Arc<dyn Transport>> {
    let transport = crate::api::transport::ReqwestTransport::new(timeout)
        .map_err(|e| ApiError::Configuration(format!("Failed to build HTTP client: {}", e)))?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> ApiResult<Arc<dyn Transport>> {
    Err(ApiError::Configuration(
        "No transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}
