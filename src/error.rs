//! Error types for configuration and validation.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! misconfigured console fails before the first request is sent.
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`AdminConfig`](crate::AdminConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API path is invalid.
    #[error("Invalid API path '{path}'. Expected a single non-empty path segment without '/', '?' or '#'.")]
    InvalidApiPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the variable.
        name: &'static str,
    },
}
