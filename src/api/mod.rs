//! The three admin API operations: sign-in, product listing, and the session
//! check.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::api::AdminApi;
//! use catalog_admin::auth::Credentials;
//! use catalog_admin::clients::RequestContext;
//!
//! let api = AdminApi::new(&config)?;
//! let signin = api.signin(&Credentials::default()).await?;
//! let context = RequestContext::for_token(&signin.session_token());
//! let products = api.list_products(&context).await?;
//! ```

mod errors;

pub use errors::ApiError;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::{Credentials, SigninResponse};
use crate::catalog::{Product, ProductListResponse};
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, RequestContext};
use crate::config::AdminConfig;

/// Sign-in endpoint path.
pub const SIGNIN_PATH: &str = "/v2/admin/signin";

/// Session check endpoint path.
pub const USER_CHECK_PATH: &str = "/v2/api/user/check";

/// Typed access to the admin endpoints.
///
/// `AdminApi` is stateless apart from its configuration; the caller passes a
/// [`RequestContext`] to every authenticated call.
#[derive(Debug, Clone)]
pub struct AdminApi {
    http_client: HttpClient,
}

// Verify AdminApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminApi>();
};

impl AdminApi {
    /// Creates an API handle for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &AdminConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &AdminConfig {
        self.http_client.config()
    }

    /// Exchanges credentials for a session token.
    ///
    /// Sign-in is always sent without an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, non-2xx status, a
    /// `success: false` body, or a body without `token`/`expired`.
    pub async fn signin(&self, credentials: &Credentials) -> Result<SigninResponse, ApiError> {
        let body = serde_json::to_value(credentials).map_err(|source| ApiError::Decode {
            endpoint: SIGNIN_PATH.to_string(),
            source,
        })?;
        let request = HttpRequest::builder(HttpMethod::Post, SIGNIN_PATH)
            .body(body)
            .body_type(DataType::Json)
            .build()?;

        let response = self
            .http_client
            .request(request, &RequestContext::anonymous())
            .await?;

        let signin: SigninResponse = decode(SIGNIN_PATH, response.body)?;
        tracing::info!(uid = ?signin.uid, expires = %signin.expired, "Signed in");
        Ok(signin)
    }

    /// Fetches the whole catalog of the configured store, in response order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, non-2xx status, a
    /// `success: false` body, or a body without a `products` mapping.
    pub async fn list_products(&self, context: &RequestContext) -> Result<Vec<Product>, ApiError> {
        let path = self.config().products_path();
        let request = HttpRequest::builder(HttpMethod::Get, path.as_str()).build()?;

        let response = self.http_client.request(request, context).await?;

        let listing: ProductListResponse = decode(&path, response.body)?;
        let products = listing.into_products();
        tracing::info!(count = products.len(), "Loaded product catalog");
        Ok(products)
    }

    /// Asks the API whether `context` carries a live session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the session is not recognised (non-2xx or
    /// `success: false`) or the request fails.
    pub async fn check_session(&self, context: &RequestContext) -> Result<(), ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, USER_CHECK_PATH).build()?;

        let response = self.http_client.request(request, context).await?;
        ensure_success(USER_CHECK_PATH, &response.body)
    }
}

/// Rejects bodies that carry `success: false` despite a 2xx status.
fn ensure_success(endpoint: &str, body: &Value) -> Result<(), ApiError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no message")
            .to_string();
        return Err(ApiError::Rejected {
            endpoint: endpoint.to_string(),
            message,
        });
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: Value) -> Result<T, ApiError> {
    ensure_success(endpoint, &body)?;
    serde_json::from_value(body).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
