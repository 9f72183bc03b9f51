//! Errors raised by the admin API operations.

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// Errors that can occur when calling an admin API endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP exchange failed (network error or non-2xx status).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body did not have the expected shape.
    #[error("Unexpected response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path that produced the body.
        endpoint: String,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// The API answered 2xx but reported `success: false`.
    #[error("Request to {endpoint} was rejected: {message}")]
    Rejected {
        /// Endpoint path that rejected the call.
        endpoint: String,
        /// The API's message, or a placeholder when none was sent.
        message: String,
    },
}

impl From<InvalidHttpRequestError> for ApiError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

impl ApiError {
    /// Returns the HTTP status code when the API answered with a non-2xx status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
