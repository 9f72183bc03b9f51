//! # Catalog Admin
//!
//! An administrative client for a remote e-commerce catalog API: sign in with
//! an email and password, list the store's products, and inspect one product
//! in a detail panel.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`AdminConfig`] and [`AdminConfigBuilder`],
//!   loadable from `BASE_URL` / `API_PATH`
//! - An async HTTP client whose credentials travel per call in a
//!   [`RequestContext`](clients::RequestContext)
//! - The three API operations in [`api::AdminApi`]: sign-in, full product
//!   listing, and the session check
//! - Token persistence in [`auth::TokenStore`] (memory or a JSON file)
//! - The [`console::AdminConsole`] view model that ties them together
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_admin::{AdminConfig, ApiPath, BaseUrl};
//!
//! let config = AdminConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .api_path(ApiPath::new("my-store").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Driving the console
//!
//! ```rust,ignore
//! use catalog_admin::api::AdminApi;
//! use catalog_admin::auth::{CredentialField, FieldUpdate, FileTokenStore};
//! use catalog_admin::console::{AdminConsole, LoginOutcome, RecordingNotifier};
//!
//! let mut console = AdminConsole::new(
//!     AdminApi::new(&config)?,
//!     FileTokenStore::new("token.json"),
//!     RecordingNotifier::default(),
//! );
//!
//! console.update_field(FieldUpdate::new(CredentialField::Username, "me@shop.io"));
//! console.update_field(FieldUpdate::new(CredentialField::Password, "secret"));
//!
//! if console.submit_login().await == LoginOutcome::SignedIn {
//!     console.select_row(0);
//! }
//! println!("{}", console.view());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the session token lives in each console's request
//!   context, never in a shared default header
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **No retries**: a failed call surfaces once and is retried by the user

pub mod api;
pub mod auth;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod console;
pub mod error;

pub use config::{AdminConfig, AdminConfigBuilder, ApiPath, BaseUrl};
pub use error::ConfigError;

pub use api::{AdminApi, ApiError};
pub use auth::{Credentials, SessionToken};
pub use catalog::Product;
pub use clients::{HttpClient, HttpError, RequestContext};
pub use console::{AdminConsole, LoginOutcome, Notifier, View};
