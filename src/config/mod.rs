//! Configuration types for the admin client.
//!
//! # Overview
//!
//! - [`AdminConfig`]: base URL, store path and user agent settings
//! - [`AdminConfigBuilder`]: a builder for constructing [`AdminConfig`] instances
//! - [`BaseUrl`]: a validated API base URL
//! - [`ApiPath`]: a validated store path segment
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::{AdminConfig, ApiPath, BaseUrl};
//!
//! let config = AdminConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .api_path(ApiPath::new("my-store").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.url_for(&config.products_path()),
//!     "https://api.example.com/v2/api/my-store/admin/products/all"
//! );
//! ```

mod newtypes;

pub use newtypes::{ApiPath, BaseUrl};

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Environment variable holding the store path.
pub const API_PATH_ENV: &str = "API_PATH";

/// Configuration for the admin client.
///
/// `AdminConfig` is `Clone`, `Send`, and `Sync`, so one configuration can be
/// shared by any number of consoles.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    base_url: BaseUrl,
    api_path: ApiPath,
    user_agent_prefix: Option<String>,
}

impl AdminConfig {
    /// Creates a new builder for constructing an `AdminConfig`.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// A `.env` file in the working directory (or any parent) is loaded first
    /// if present; variables already set in the environment take precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `BASE_URL` or `API_PATH` is
    /// unset, or a validation error if either value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AdminConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV).ok_or(ConfigError::MissingEnvVar {
            name: BASE_URL_ENV,
        })?;
        let api_path = lookup(API_PATH_ENV).ok_or(ConfigError::MissingEnvVar {
            name: API_PATH_ENV,
        })?;

        Self::builder()
            .base_url(BaseUrl::new(base_url)?)
            .api_path(ApiPath::new(api_path)?)
            .build()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the store path.
    #[must_use]
    pub const fn api_path(&self) -> &ApiPath {
        &self.api_path
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Path of the full product listing for the configured store.
    #[must_use]
    pub fn products_path(&self) -> String {
        format!("/v2/api/{}/admin/products/all", self.api_path)
    }

    /// Absolute URL for an endpoint path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        self.base_url.join(path)
    }
}

// Verify AdminConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminConfig>();
};

/// Builder for constructing [`AdminConfig`] instances.
///
/// `base_url` and `api_path` are required.
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    base_url: Option<BaseUrl>,
    api_path: Option<ApiPath>,
    user_agent_prefix: Option<String>,
}

impl AdminConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the store path (required).
    #[must_use]
    pub fn api_path(mut self, path: ApiPath) -> Self {
        self.api_path = Some(path);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AdminConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_path` are not set.
    pub fn build(self) -> Result<AdminConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_path = self
            .api_path
            .ok_or(ConfigError::MissingRequiredField { field: "api_path" })?;

        Ok(AdminConfig {
            base_url,
            api_path,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
