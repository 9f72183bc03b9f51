//! Login form credentials.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Username prefilled into a fresh login form.
pub const DEFAULT_USERNAME: &str = "example@test.com";

/// Password prefilled into a fresh login form.
pub const DEFAULT_PASSWORD: &str = "example";

/// The credential pair submitted to the sign-in endpoint.
///
/// Serializes to the sign-in request body `{"username": ..., "password": ...}`.
/// The `Debug` output masks the password.
///
/// # Example
///
/// ```rust
/// use catalog_admin::auth::{CredentialField, Credentials, FieldUpdate};
///
/// let mut credentials = Credentials::default();
/// credentials.apply(FieldUpdate::new(CredentialField::Password, "hunter2"));
///
/// assert_eq!(credentials.username, "example@test.com");
/// assert_eq!(credentials.password, "hunter2");
/// assert!(!format!("{credentials:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Email-shaped account identifier.
    pub username: String,
    /// Account secret.
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Overwrites one field.
    pub fn apply(&mut self, update: FieldUpdate) {
        let FieldUpdate { field, value } = update;
        match field {
            CredentialField::Username => self.username = value,
            CredentialField::Password => self.password = value,
        }
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::Username => &self.username,
            CredentialField::Password => &self.password,
        }
    }

    /// Checks the same constraints a browser enforces on the login form:
    /// both fields are required and the username must look like an email.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError`] naming the first failing constraint.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        for field in [CredentialField::Username, CredentialField::Password] {
            if self.get(field).is_empty() {
                return Err(CredentialsError::MissingField { field });
            }
        }

        if !looks_like_email(&self.username) {
            return Err(CredentialsError::InvalidEmail {
                username: self.username.clone(),
            });
        }

        Ok(())
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

/// `local@domain`, both parts non-empty, no whitespace.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// A login form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialField {
    /// The email-shaped username.
    Username,
    /// The password.
    Password,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Password => f.write_str("password"),
        }
    }
}

/// A single edit to the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldUpdate {
    /// The field being edited.
    pub field: CredentialField,
    /// The field's new value.
    pub value: String,
}

impl FieldUpdate {
    /// Creates an update setting `field` to `value`.
    #[must_use]
    pub fn new(field: CredentialField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Reasons a login form cannot be submitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    /// A required field is empty.
    #[error("Please fill in the {field} field.")]
    MissingField {
        /// The empty field.
        field: CredentialField,
    },

    /// The username is not email-shaped.
    #[error("'{username}' is not a valid email address.")]
    InvalidEmail {
        /// The rejected username.
        username: String,
    },
}
