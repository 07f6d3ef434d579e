//! Credential storage for the access/refresh token pair
//!
//! The store holds exactly two string slots. Only the request coordinator
//! (and the account endpoints' login/logout flows) write to it; nothing else
//! in the workspace may mutate tokens directly.

use parking_lot::RwLock;

#[cfg(feature = "keychain")]
mod keychain;

#[cfg(feature = "keychain")]
pub use keychain::KeyringCredentialStore;

/// Capability trait for persisting the bearer token pair
///
/// The interface is deliberately infallible: a storage backend that can fail
/// (e.g. a platform keychain) logs the failure and degrades to "no token"
/// rather than poisoning every API call with storage errors.
pub trait CredentialStore: Send + Sync {
    /// Current access token, if any.
    fn access_token(&self) -> Option<String>;

    /// Persist a new access token.
    fn set_access_token(&self, token: &str);

    /// Current refresh token, if any.
    fn refresh_token(&self) -> Option<String>;

    /// Persist a new refresh token.
    fn set_refresh_token(&self, token: &str);

    /// Remove both tokens (logout / forced logout).
    fn clear_all(&self);
}

#[derive(Debug, Default)]
struct TokenSlots {
    access: Option<String>,
    refresh: Option<String>,
}

/// In-process credential store
///
/// The default backend: tokens live for the lifetime of the client, the
/// moral equivalent of a browser tab's local storage.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slots: RwLock<TokenSlots>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token pair (useful in tests and for
    /// session restore).
    #[must_use]
    pub fn with_tokens(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            slots: RwLock::new(TokenSlots {
                access: Some(access.into()),
                refresh: Some(refresh.into()),
            }),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.slots.read().access.clone()
    }

    fn set_access_token(&self, token: &str) {
        self.slots.write().access = Some(token.to_string());
    }

    fn refresh_token(&self) -> Option<String> {
        self.slots.read().refresh.clone()
    }

    fn set_refresh_token(&self, token: &str) {
        self.slots.write().refresh = Some(token.to_string());
    }

    fn clear_all(&self) {
        let mut slots = self.slots.write();
        slots.access = None;
        slots.refresh = None;
    }
}
