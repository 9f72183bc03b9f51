//! HTTP client types for the admin API.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`HttpMethod`]: supported HTTP methods (GET, POST)
//! - [`DataType`]: content types for request bodies
//! - [`RequestContext`]: per-caller values (the session token) threaded into
//!   every call
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::clients::{HttpClient, HttpMethod, HttpRequest, RequestContext};
//!
//! let client = HttpClient::new(&config)?;
//! let mut context = RequestContext::anonymous();
//! context.authorize(token);
//!
//! let request = HttpRequest::builder(HttpMethod::Post, "/v2/api/user/check").build()?;
//! let response = client.request(request, &context).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod request_context;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use request_context::{RequestContext, AUTHORIZATION_HEADER};
