//! Test doubles for the client's capability traits
//!
//! Used by this crate's own tests and available to embedders for theirs.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::navigation::Navigator;

/// Navigator that counts redirects instead of performing them
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    /// Create a navigator with zero recorded redirects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of login redirects requested so far.
    #[must_use]
    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}
