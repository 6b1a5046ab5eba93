//! Client configuration.
//!
//! A [`ClientConfig`] holds everything a client needs besides its transport:
//! the secret key and the base endpoint. The base endpoint is resolved when
//! the config is built, so a client never mutates it afterwards.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Production endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "STRIPE_SECRET_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "STRIPE_BASE_URL";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("STRIPE_SECRET_KEY environment variable not set")]
    MissingSecretKey,

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Credentials and endpoint for a [`StripeClient`].
///
/// `Debug` output never includes the secret key.
///
/// [`StripeClient`]: crate::client::StripeClient
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    secret_key: String,
    base_url: Url,
}

impl ClientConfig {
    /// Create a config that targets [`DEFAULT_BASE_URL`].
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            base_url: default_base_url(),
        }
    }

    /// Target a different endpoint, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Load the config from `STRIPE_SECRET_KEY` and the optional
    /// `STRIPE_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret_key = lookup(SECRET_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingSecretKey)?;

        let config = Self::new(secret_key);
        match lookup(BASE_URL_ENV).filter(|url| !url.is_empty()) {
            Some(base_url) => Ok(config.with_base_url(Url::parse(&base_url)?)),
            None => Ok(config),
        }
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default base url")
}
