//! Persistence for the single session token.
//!
//! A store behaves like the browser's cookie jar for `hexToken`: it keeps the
//! last saved token until its expiry passes, after which `load` no longer
//! returns it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::session::SessionToken;

/// Errors raised by persistent token stores.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Reading or writing the backing file failed.
    #[error("Token store I/O error at {path}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The stored record could not be encoded or decoded.
    #[error("Token store record is malformed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored record holds something other than a `hexToken` cookie.
    #[error("Token store holds an unreadable cookie")]
    InvalidCookie,
}

/// Storage for the session token.
pub trait TokenStore: Send {
    /// Persists `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] if the token cannot be written.
    fn save(&mut self, token: &SessionToken) -> Result<(), TokenStoreError>;

    /// Returns the stored token unless it is missing or expired.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] if the store exists but cannot be read.
    fn load(&self) -> Result<Option<SessionToken>, TokenStoreError>;

    /// Removes the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] if the token cannot be removed.
    fn clear(&mut self) -> Result<(), TokenStoreError>;
}

/// On-disk shape of the stored cookie.
#[derive(Debug, Serialize, Deserialize)]
struct CookieRecord {
    cookie: String,
}

/// A token store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<SessionToken>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { token: None }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&mut self, token: &SessionToken) -> Result<(), TokenStoreError> {
        self.token = Some(token.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionToken>, TokenStoreError> {
        Ok(self.token.clone().filter(|token| !token.expired()))
    }

    fn clear(&mut self) -> Result<(), TokenStoreError> {
        self.token = None;
        Ok(())
    }
}

/// A token store backed by a JSON file.
///
/// # Example
///
/// ```rust,no_run
/// use catalog_admin::auth::{FileTokenStore, TokenStore};
///
/// let store = FileTokenStore::new("/tmp/catalog-admin/token.json");
/// let token = store.load()?;
/// # Ok::<(), catalog_admin::auth::TokenStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store that reads and writes `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The per-user default location, `<config dir>/catalog-admin/token.json`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("catalog-admin").join("token.json"))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> TokenStoreError {
        TokenStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TokenStore for FileTokenStore {
    fn save(&mut self, token: &SessionToken) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let record = CookieRecord {
            cookie: token.to_cookie(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), "Saved session token");
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionToken>, TokenStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let record: CookieRecord = serde_json::from_str(&content)?;
        let token =
            SessionToken::from_cookie(&record.cookie).ok_or(TokenStoreError::InvalidCookie)?;
        Ok(Some(token).filter(|token| !token.expired()))
    }

    fn clear(&mut self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
