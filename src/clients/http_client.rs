//! HTTP client for the admin API.
//!
//! This module provides the [`HttpClient`] type. The client carries only
//! caller-independent defaults; credentials arrive per call through a
//! [`RequestContext`].

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::request_context::{RequestContext, AUTHORIZATION_HEADER};
use crate::config::AdminConfig;

/// Crate version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the admin API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (User-Agent, Accept)
/// - Per-call `Authorization` from the [`RequestContext`]
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// Failed requests are returned to the caller as-is; there is no retry.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_admin::clients::{HttpClient, HttpMethod, HttpRequest, RequestContext};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, config.products_path()).build()?;
/// let response = client.request(request, &RequestContext::anonymous()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: AdminConfig,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &AdminConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Catalog Admin v{CLIENT_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        tracing::debug!(
            host = config.base_url().host_name(),
            store = %config.api_path(),
            "Created HTTP client"
        );

        Ok(Self {
            client,
            config: config.clone(),
            default_headers,
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request on behalf of the caller described by `context`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(
        &self,
        request: HttpRequest,
        context: &RequestContext,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.config.url_for(&request.path);
        let headers = self.merge_headers(&request, context);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            %url,
            authorized = context.authorization().is_some(),
            "Sending request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body);
        tracing::debug!(status = code, path = %request.path, "Received response");

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::error_message(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Combines default, body-type and context headers.
    fn merge_headers(
        &self,
        request: &HttpRequest,
        context: &RequestContext,
    ) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(token) = context.authorization() {
            headers.insert(AUTHORIZATION_HEADER.to_string(), token.to_string());
        }
        headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn error_message(response: &HttpResponse) -> String {
        response.message().map_or_else(
            || format!("request failed with status {}", response.code),
            String::from,
        )
    }
}
