//! Transient user notifications and the post-401 redirect.

use jobmatch_client::Navigator;

/// Short success/error messages shown to the user after an action.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints notifications to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("✓ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Terminal stand-in for navigating to a route.
///
/// A CLI has no login screen to jump to, so the redirect becomes a hint
/// pointing at the `login` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn redirect(&self, route: &str) {
        tracing::debug!(route = %route, "Redirecting after unauthorized response");
        eprintln!("Your session has expired. Run `jobmatch login` to sign in again.");
    }
}
