//! Service base URLs for the Box Office environments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Root domain shared by every service host.
pub const DEFAULT_DOMAIN: &str = "boxoffice-api.com";

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    Production,
    Staging,
    Qa,
    Dev,
}

impl Environment {
    /// Host prefix for non-production environments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Qa => "qa",
            Self::Dev => "dev",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unrecognised names fall back to production.
impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "staging" => Self::Staging,
            "qa" => Self::Qa,
            "dev" | "development" => Self::Dev,
            _ => Self::Production,
        })
    }
}

/// The REST services wrapped by this SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    Basket,
    Checkout,
    Payment,
    Pricing,
    Inventory,
    Venue,
    Content,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basket => "basket",
            Self::Checkout => "checkout",
            Self::Payment => "payment",
            Self::Pricing => "pricing",
            Self::Inventory => "inventory",
            Self::Venue => "venue",
            Self::Content => "content",
        }
    }

    /// Base URL of this service in `environment`.
    ///
    /// Production: `https://{service}-service.boxoffice-api.com`.
    /// Others: `https://{env}-{service}-service.boxoffice-api.com`.
    pub fn base_url(&self, environment: Environment) -> String {
        match environment {
            Environment::Production => {
                format!("https://{}-service.{}", self.as_str(), DEFAULT_DOMAIN)
            }
            env => format!(
                "https://{}-{}-service.{}",
                env.as_str(),
                self.as_str(),
                DEFAULT_DOMAIN
            ),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
