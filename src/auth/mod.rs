//! Authentication types.
//!
//! # Overview
//!
//! - [`Credentials`]: the login form's username/password pair
//! - [`FieldUpdate`]: a tagged edit to one login form field
//! - [`SessionToken`]: the token and expiry issued by sign-in
//! - [`TokenStore`]: persistence for the token (in memory or on disk)
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::auth::{MemoryTokenStore, SessionToken, TokenStore};
//! use chrono::{Duration, Utc};
//!
//! let mut store = MemoryTokenStore::new();
//! store.save(&SessionToken::new("abc", Utc::now() + Duration::days(1))).unwrap();
//!
//! assert_eq!(store.load().unwrap().unwrap().token, "abc");
//! ```

mod credentials;
pub mod session;
mod token_store;

pub use credentials::{
    CredentialField, Credentials, CredentialsError, FieldUpdate, DEFAULT_PASSWORD,
    DEFAULT_USERNAME,
};
pub use session::{SessionToken, SigninResponse, TOKEN_COOKIE_NAME};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};
