//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction. Invalid values are
//! rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated base URL for the remote API.
///
/// The URL must carry a scheme and a host. Trailing slashes are stripped so
/// endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use catalog_admin::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com");
/// assert_eq!(url.host_name(), "api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme, a
    /// non-alphabetic scheme, or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins an absolute endpoint path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated store path segment.
///
/// The remote API scopes catalog endpoints by a per-store path
/// (`/v2/api/{api_path}/admin/...`). The value must be a single URL path
/// segment.
///
/// # Example
///
/// ```rust
/// use catalog_admin::ApiPath;
///
/// let path = ApiPath::new("my-store").unwrap();
/// assert_eq!(path.as_ref(), "my-store");
/// assert!(ApiPath::new("a/b").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiPath(String);

impl ApiPath {
    /// Creates a new validated API path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiPath`] if the path is empty or
    /// contains whitespace, `/`, `?` or `#`.
    pub fn new(path: impl Into<String>) -> Result<Self, ConfigError> {
        let path = path.into();
        let path = path.trim().to_string();

        let valid = !path.is_empty()
            && !path
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'));
        if !valid {
            return Err(ConfigError::InvalidApiPath { path });
        }

        Ok(Self(path))
    }
}

impl AsRef<str> for ApiPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ApiPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("https://api.example.com").unwrap();
        assert_eq!(url.host_name(), "api.example.com");

        // With port
        let url = BaseUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.host_name(), "localhost");

        // With path prefix
        let url = BaseUrl::new("https://example.com/proxy").unwrap();
        assert_eq!(url.host_name(), "example.com");
        assert_eq!(url.as_ref(), "https://example.com/proxy");
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("  https://api.example.com// ").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("api.example.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://example.com").is_err());
        assert!(BaseUrl::new("ht1p://example.com").is_err());
        assert!(BaseUrl::new("https://:8080").is_err());
    }

    #[test]
    fn test_base_url_join() {
        let url = BaseUrl::new("https://api.example.com").unwrap();
        assert_eq!(
            url.join("/v2/admin/signin"),
            "https://api.example.com/v2/admin/signin"
        );
        assert_eq!(
            url.join("v2/api/user/check"),
            "https://api.example.com/v2/api/user/check"
        );
    }

    #[test]
    fn test_api_path_rejects_invalid() {
        assert!(ApiPath::new("").is_err());
        assert!(ApiPath::new("   ").is_err());
        assert!(ApiPath::new("a/b").is_err());
        assert!(ApiPath::new("a b").is_err());
        assert!(ApiPath::new("store?x=1").is_err());
        assert!(ApiPath::new("store#top").is_err());
    }

    #[test]
    fn test_api_path_trims_whitespace() {
        let path = ApiPath::new(" my-store ").unwrap();
        assert_eq!(path.as_ref(), "my-store");
    }

    #[test]
    fn test_api_path_deserialize_validates() {
        let path: ApiPath = serde_json::from_str(r#""shop""#).unwrap();
        assert_eq!(path.as_ref(), "shop");

        let result: Result<ApiPath, _> = serde_json::from_str(r#""a/b""#);
        assert!(result.is_err());
    }
}
