//! The admin console view state.

use std::fmt;

use crate::api::AdminApi;
use crate::auth::{Credentials, CredentialsError, FieldUpdate, TokenStore};
use crate::catalog::Product;
use crate::clients::RequestContext;
use crate::console::notifier::{
    Notifier, CATALOG_FAILED, LOGIN_FAILED, SESSION_ACTIVE, SESSION_INACTIVE,
};
use crate::console::render;

/// Result of submitting the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The form failed local validation; nothing was sent.
    Invalid(CredentialsError),
    /// The API refused the credentials or could not be reached.
    Failed,
    /// Signed in; the catalog fetch has been attempted.
    SignedIn,
}

/// What the console currently shows.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// The login form, shown exclusively while unauthenticated.
    Login {
        /// Current form values.
        credentials: &'a Credentials,
    },
    /// The product table with its detail panel.
    Catalog {
        /// The catalog, in API order.
        products: &'a [Product],
        /// The product shown in the detail panel.
        selected: Option<&'a Product>,
    },
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login { credentials } => f.write_str(&render::render_login(credentials)),
            Self::Catalog { products, selected } => {
                writeln!(f, "{}", render::render_catalog(products))?;
                writeln!(f)?;
                write!(f, "{}", render::DetailPanel(*selected))
            }
        }
    }
}

/// Login form, product list and detail panel over the admin API.
///
/// The console toggles between two states. Unauthenticated, it shows only the
/// login form. A successful sign-in stores the token, threads it into every
/// later request through the console's own [`RequestContext`], flips to
/// authenticated and loads the catalog. Every failure ends in exactly one
/// blocking alert through the [`Notifier`] plus a log record.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_admin::api::AdminApi;
/// use catalog_admin::auth::MemoryTokenStore;
/// use catalog_admin::console::{AdminConsole, LoginOutcome, RecordingNotifier};
///
/// let mut console = AdminConsole::new(
///     AdminApi::new(&config)?,
///     MemoryTokenStore::new(),
///     RecordingNotifier::default(),
/// );
///
/// if console.submit_login().await == LoginOutcome::SignedIn {
///     console.select_row(0);
///     println!("{}", console.view());
/// }
/// ```
#[derive(Debug)]
pub struct AdminConsole<S, N> {
    api: AdminApi,
    context: RequestContext,
    credentials: Credentials,
    authenticated: bool,
    products: Vec<Product>,
    selected: Option<Product>,
    token_store: S,
    notifier: N,
}

impl<S: TokenStore, N: Notifier> AdminConsole<S, N> {
    /// Creates an unauthenticated console with the default form values.
    ///
    /// A live token already in `token_store` is loaded into the request
    /// context, but the console still starts on the login form.
    pub fn new(api: AdminApi, token_store: S, notifier: N) -> Self {
        let context = match token_store.load() {
            Ok(Some(token)) => {
                tracing::debug!("Restored stored session token");
                RequestContext::for_token(&token)
            }
            Ok(None) => RequestContext::anonymous(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable token store: {e}");
                RequestContext::anonymous()
            }
        };

        Self {
            api,
            context,
            credentials: Credentials::default(),
            authenticated: false,
            products: Vec::new(),
            selected: None,
            token_store,
            notifier,
        }
    }

    /// Current login form values.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Applies one edit to the login form.
    pub fn update_field(&mut self, update: FieldUpdate) {
        self.credentials.apply(update);
    }

    /// Whether a sign-in has succeeded (and no logout followed).
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The current catalog, in API order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The product shown in the detail panel.
    #[must_use]
    pub const fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// The context attached to outbound requests.
    #[must_use]
    pub const fn request_context(&self) -> &RequestContext {
        &self.context
    }

    /// The token store.
    #[must_use]
    pub const fn token_store(&self) -> &S {
        &self.token_store
    }

    /// The alert surface.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// What should be displayed right now.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        if self.authenticated {
            View::Catalog {
                products: &self.products,
                selected: self.selected.as_ref(),
            }
        } else {
            View::Login {
                credentials: &self.credentials,
            }
        }
    }

    /// Submits the login form.
    ///
    /// On success the token is persisted, attached to this console's request
    /// context, the console becomes authenticated and the catalog is fetched
    /// once. On failure one alert is shown and the state is left untouched.
    pub async fn submit_login(&mut self) -> LoginOutcome {
        if let Err(e) = self.credentials.validate() {
            tracing::debug!("Login form not submitted: {e}");
            return LoginOutcome::Invalid(e);
        }

        let signin = match self.api.signin(&self.credentials).await {
            Ok(signin) => signin,
            Err(e) => {
                tracing::error!("Login failed: {e}");
                self.notifier.alert(LOGIN_FAILED);
                return LoginOutcome::Failed;
            }
        };

        let token = signin.session_token();
        if let Err(e) = self.token_store.save(&token) {
            tracing::warn!("Could not persist session token: {e}");
        }
        self.context = RequestContext::for_token(&token);
        self.authenticated = true;

        self.fetch_products().await;
        LoginOutcome::SignedIn
    }

    /// Reloads the catalog.
    ///
    /// Returns `true` if the catalog was replaced. On failure one alert is
    /// shown and the previous catalog is kept.
    pub async fn fetch_products(&mut self) -> bool {
        match self.api.list_products(&self.context).await {
            Ok(products) => {
                self.products = products;
                true
            }
            Err(e) => {
                tracing::error!("Failed to fetch product list: {e}");
                self.notifier.alert(CATALOG_FAILED);
                false
            }
        }
    }

    /// Shows `product` in the detail panel.
    pub fn select_product(&mut self, product: Product) {
        self.selected = Some(product);
    }

    /// Shows the catalog row at `index` (0-based) in the detail panel.
    ///
    /// An out-of-range index leaves the selection unchanged and returns `None`.
    pub fn select_row(&mut self, index: usize) -> Option<&Product> {
        let product = self.products.get(index)?.clone();
        self.selected = Some(product);
        self.selected.as_ref()
    }

    /// Asks the API whether the current token is live and alerts the answer.
    ///
    /// Returns `true` when the API confirms the session.
    pub async fn check_login(&mut self) -> bool {
        match self.api.check_session(&self.context).await {
            Ok(()) => {
                self.notifier.alert(SESSION_ACTIVE);
                true
            }
            Err(e) => {
                tracing::warn!("Session check failed: {e}");
                self.notifier.alert(SESSION_INACTIVE);
                false
            }
        }
    }

    /// Forgets the token and returns to the login form.
    ///
    /// The catalog and selection are kept in memory.
    pub fn logout(&mut self) {
        if let Err(e) = self.token_store.clear() {
            tracing::warn!("Could not clear stored session token: {e}");
        }
        self.context.clear();
        self.authenticated = false;
        tracing::info!("Logged out");
    }
}
