//! Per-caller request context.
//!
//! The authorization token travels with each call instead of living in a
//! client-wide default header, so two consoles sharing one [`HttpClient`]
//! never see each other's credentials.
//!
//! [`HttpClient`]: crate::clients::HttpClient

use std::fmt;

use crate::auth::SessionToken;

/// Header carrying the session token. The API expects the raw token value,
/// without a `Bearer` scheme.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Values attached to every outbound request made on behalf of one caller.
///
/// # Example
///
/// ```rust
/// use catalog_admin::clients::RequestContext;
///
/// let mut context = RequestContext::anonymous();
/// assert!(context.authorization().is_none());
///
/// context.authorize("abc");
/// assert_eq!(context.authorization(), Some("abc"));
/// assert_eq!(format!("{context:?}"), "RequestContext { authorization: Some(*****) }");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    authorization: Option<String>,
}

impl RequestContext {
    /// A context that sends no credentials.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            authorization: None,
        }
    }

    /// A context presenting the given session token.
    #[must_use]
    pub fn for_token(token: &SessionToken) -> Self {
        Self {
            authorization: Some(token.token.clone()),
        }
    }

    /// Replaces the presented token.
    pub fn authorize(&mut self, token: impl Into<String>) {
        self.authorization = Some(token.into());
    }

    /// Drops the presented token.
    pub fn clear(&mut self) {
        self.authorization = None;
    }

    /// Returns the raw `Authorization` header value, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self.authorization.as_ref().map(|_| MaskedToken);
        f.debug_struct("RequestContext")
            .field("authorization", &masked)
            .finish()
    }
}

struct MaskedToken;

impl fmt::Debug for MaskedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*****")
    }
}
