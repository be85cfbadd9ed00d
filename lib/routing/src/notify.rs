//! The notification seam.
//!
//! Denied navigations surface a single human-readable notice. The UI shell
//! decides how to show it; the navigation core only needs a fire-and-forget
//! sink.

use tracing::warn;

/// Fire-and-forget sink for user-visible navigation notices.
pub trait Notifier: Send + Sync {
    /// Shows one notice to the user. Must not fail or block.
    fn notify(&self, message: &str);
}

/// Notifier that reports through the tracing pipeline.
///
/// The headless stand-in for a toast: notices land in the client log at
/// warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(%message, "navigation notice");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_notifier_is_callable() {
        // No observable output to assert on; the contract is "does not
        // panic, does not block".
        TracingNotifier.notify("test notice");
    }
}
