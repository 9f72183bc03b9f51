//! The admin console: login form, product table and detail panel.
//!
//! - [`AdminConsole`]: the two-state view model driving the API calls
//! - [`View`]: what to display; its `Display` impl renders plain text
//! - [`Notifier`]: the blocking alert surface
//! - [`render`]: the text renderers behind [`View`]

mod admin_console;
mod notifier;
pub mod render;

pub use admin_console::{AdminConsole, LoginOutcome, View};
pub use notifier::{
    Notifier, RecordingNotifier, CATALOG_FAILED, LOGIN_FAILED, SESSION_ACTIVE, SESSION_INACTIVE,
};
