//! Session tokens issued by the sign-in endpoint.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Name under which the token is persisted.
pub const TOKEN_COOKIE_NAME: &str = "hexToken";

const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// An opaque bearer token plus the instant it stops being retained.
///
/// The token is never revalidated locally before use; `expires` only governs
/// how long a [`TokenStore`](crate::auth::TokenStore) keeps it.
///
/// # Example
///
/// ```rust
/// use catalog_admin::auth::SessionToken;
/// use chrono::{Duration, Utc};
///
/// let token = SessionToken::new("abc", Utc::now() + Duration::hours(1));
/// assert!(!token.expired());
/// let cookie = token.to_cookie();
/// assert!(cookie.starts_with("hexToken=abc; expires="));
/// assert_eq!(SessionToken::from_cookie(&cookie).unwrap().token, "abc");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// The raw token value sent as the `Authorization` header.
    pub token: String,

    /// When the stored token expires.
    pub expires: DateTime<Utc>,
}

impl SessionToken {
    /// Creates a new session token.
    #[must_use]
    pub fn new(token: impl Into<String>, expires: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires,
        }
    }

    /// Returns `true` if the expiry instant has passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        Utc::now() > self.expires
    }

    /// Renders the token as a `Set-Cookie` style string.
    ///
    /// The expiry keeps whole seconds only.
    #[must_use]
    pub fn to_cookie(&self) -> String {
        format!(
            "{TOKEN_COOKIE_NAME}={}; expires={}",
            self.token,
            self.expires.format(COOKIE_DATE_FORMAT)
        )
    }

    /// Parses a string produced by [`to_cookie`](Self::to_cookie).
    ///
    /// Returns `None` unless the cookie is named `hexToken`, has a non-empty
    /// value and carries a readable `expires` attribute.
    #[must_use]
    pub fn from_cookie(cookie: &str) -> Option<Self> {
        let mut parts = cookie.split(';').map(str::trim);
        let (name, token) = parts.next()?.split_once('=')?;
        if name != TOKEN_COOKIE_NAME || token.is_empty() {
            return None;
        }

        let expires = parts.find_map(|attribute| {
            let (key, value) = attribute.split_once('=')?;
            key.eq_ignore_ascii_case("expires").then_some(value)
        })?;
        let expires = NaiveDateTime::parse_from_str(expires, COOKIE_DATE_FORMAT).ok()?;

        Some(Self::new(token, Utc.from_utc_datetime(&expires)))
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("token", &"*****")
            .field("expires", &self.expires)
            .finish()
    }
}

// Verify SessionToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionToken>();
};

/// Response body of a successful sign-in.
///
/// The API sends `expired` as epoch milliseconds; RFC 3339 strings are also
/// accepted.
#[derive(Clone, Debug, Deserialize)]
pub struct SigninResponse {
    /// Whether the API reports success.
    #[serde(default)]
    pub success: Option<bool>,
    /// Human readable status message.
    #[serde(default)]
    pub message: Option<String>,
    /// Account identifier.
    #[serde(default)]
    pub uid: Option<String>,
    /// The issued token.
    pub token: String,
    /// Token expiry.
    #[serde(deserialize_with = "deserialize_expiry")]
    pub expired: DateTime<Utc>,
}

impl SigninResponse {
    /// Extracts the session token.
    #[must_use]
    pub fn session_token(&self) -> SessionToken {
        SessionToken::new(self.token.clone(), self.expired)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExpiryRepr {
    Millis(i64),
    Text(String),
}

fn deserialize_expiry<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match ExpiryRepr::deserialize(deserializer)? {
        ExpiryRepr::Millis(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| de::Error::custom(format!("expiry out of range: {millis}"))),
        ExpiryRepr::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|e| de::Error::custom(format!("invalid expiry '{text}': {e}"))),
    }
}
