//! Navigation capability
//!
//! The coordinator's only autonomous user-visible action is forcing the user
//! back to the login destination after an unrecoverable authorization
//! failure. The embedder (a UI shell, a TUI, a test harness) supplies the
//! actual navigation behind this trait.

use tracing::info;

/// Capability trait for the forced-logout redirect
pub trait Navigator: Send + Sync {
    /// Send the user to the login destination. Fire-and-forget; the
    /// coordinator does not wait for navigation to complete.
    fn redirect_to_login(&self);
}

/// Navigator for headless embedders: logs the redirect and does nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_login(&self) {
        info!("session ended, login required");
    }
}
