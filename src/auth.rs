//! Authentication for the Box Office services.
//!
//! Credentials are supplied once per [`ApiContext`](crate::config::ApiContext)
//! and snapshotted for every call. The [`AuthMode`] flag selects which
//! [`Authenticator`] (if any) is attached to an outgoing request.
//!
//! # Selection rules
//!
//! - `Bearer` attaches a bearer authenticator only when an access token is
//!   present and non-empty. Without one the request goes out unauthenticated.
//! - `Basic` always attaches the username/password pair.
//! - `None` (and any unrecognised mode name) attaches nothing.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Which authenticator to attach to outgoing requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthMode {
    /// No authentication.
    #[default]
    None,
    /// HTTP Basic with username and password.
    Basic,
    /// Bearer token.
    Bearer,
}

impl AuthMode {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Bearer => "bearer",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsing never fails: unrecognised names fall back to [`AuthMode::None`].
impl FromStr for AuthMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Self::Basic,
            "bearer" | "token" => Self::Bearer,
            _ => Self::None,
        })
    }
}

/// Credentials owned by a client context.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub access_token: Option<String>,
    pub auth_mode: AuthMode,
}

impl Credentials {
    /// Credentials that attach no authenticator.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Basic credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            access_token: None,
            auth_mode: AuthMode::Basic,
        }
    }

    /// Bearer credentials.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            auth_mode: AuthMode::Bearer,
            ..Self::default()
        }
    }

    /// Select the authenticator for these credentials.
    pub fn authenticator(&self) -> Option<Authenticator> {
        match self.auth_mode {
            AuthMode::Bearer => self
                .access_token
                .as_deref()
                .filter(|token| !token.is_empty())
                .map(|token| Authenticator::Bearer {
                    token: token.to_string(),
                }),
            AuthMode::Basic => Some(Authenticator::Basic {
                username: self.username.clone(),
                password: self.password.clone(),
            }),
            AuthMode::None => None,
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("auth_mode", &self.auth_mode)
            .finish()
    }
}

/// Strategy that injects credentials into an outgoing request.
#[derive(Clone, PartialEq, Eq)]
pub enum Authenticator {
    Basic { username: String, password: String },
    Bearer { token: String },
}

impl Authenticator {
    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{}:{}", username, password));
                format!("Basic {}", encoded)
            }
            Self::Bearer { token } => format!("Bearer {}", token),
        }
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
        }
    }
}
