//! Where the client is sent when the session ends.

use tracing::warn;

/// Route the client is redirected to after a 401.
pub const LOGIN_ROUTE: &str = "/login";

/// Receives redirect requests from the auth interceptors.
///
/// A browser would change location; a terminal front end tells the user to
/// sign in again.
pub trait Navigator: Send + Sync {
    /// Move the client to `route`
    fn redirect(&self, route: &str);
}

/// Navigator that only records the redirect in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, route: &str) {
        warn!(route = %route, "Session ended, redirecting");
    }
}
