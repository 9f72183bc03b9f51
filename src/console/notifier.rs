//! Blocking user-facing alerts.

/// Alert shown when sign-in fails for any reason.
pub const LOGIN_FAILED: &str = "Login failed";

/// Alert shown when the catalog cannot be loaded.
pub const CATALOG_FAILED: &str = "Unable to fetch product list, please try again later";

/// Alert shown when the session check succeeds.
pub const SESSION_ACTIVE: &str = "User is logged in";

/// Alert shown when the session check fails.
pub const SESSION_INACTIVE: &str = "User is not logged in";

/// Surface for blocking alerts.
///
/// An implementation should not return until the user has acknowledged the
/// message (a modal dialog, or a terminal prompt waiting for Enter).
pub trait Notifier {
    /// Shows `message` and waits for acknowledgement.
    fn alert(&mut self, message: &str);
}

/// A notifier that records alerts instead of showing them.
///
/// Useful for headless embedding and for asserting on alerts in tests.
///
/// # Example
///
/// ```rust
/// use catalog_admin::console::{Notifier, RecordingNotifier};
///
/// let mut notifier = RecordingNotifier::default();
/// notifier.alert("Login failed");
/// assert_eq!(notifier.alerts(), ["Login failed"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    alerts: Vec<String>,
}

impl RecordingNotifier {
    /// Alerts shown so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Forgets recorded alerts.
    pub fn clear(&mut self) {
        self.alerts.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let mut notifier = RecordingNotifier::default();
        notifier.alert(LOGIN_FAILED);
        notifier.alert(CATALOG_FAILED);

        assert_eq!(notifier.alerts(), [LOGIN_FAILED, CATALOG_FAILED]);

        notifier.clear();
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn show(mut notifier: impl Notifier) {
            notifier.alert(SESSION_ACTIVE);
        }

        let mut notifier = RecordingNotifier::default();
        show(&mut notifier);
        assert_eq!(notifier.alerts(), [SESSION_ACTIVE]);
    }
}
