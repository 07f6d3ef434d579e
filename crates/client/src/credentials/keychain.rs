//! Platform keychain credential store
//!
//! Persists the token pair in the operating system keychain (macOS Keychain,
//! Windows Credential Manager, Linux Secret Service) via the `keyring` crate,
//! so a desktop embedder keeps its session across restarts.

use keyring::Entry;
use tracing::warn;

use super::CredentialStore;

const ACCESS_ACCOUNT: &str = "access";
const REFRESH_ACCOUNT: &str = "refresh";

/// Credential store backed by the platform keychain
#[derive(Debug)]
pub struct KeyringCredentialStore {
    service: String,
}

impl KeyringCredentialStore {
    /// Create a store under the given keychain service name
    /// (e.g. `"Shopfront.api"`).
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    fn entry(&self, account: &str) -> Option<Entry> {
        match Entry::new(&self.service, account) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(service = %self.service, account, error = %err, "keychain entry unavailable");
                None
            }
        }
    }

    fn read(&self, account: &str) -> Option<String> {
        let entry = self.entry(account)?;
        match entry.get_password() {
            Ok(secret) => Some(secret),
            Err(keyring::Error::NoEntry) => None,
            Err(err) => {
                warn!(service = %self.service, account, error = %err, "keychain read failed");
                None
            }
        }
    }

    fn write(&self, account: &str, secret: &str) {
        if let Some(entry) = self.entry(account) {
            if let Err(err) = entry.set_password(secret) {
                warn!(service = %self.service, account, error = %err, "keychain write failed");
            }
        }
    }

    fn delete(&self, account: &str) {
        if let Some(entry) = self.entry(account) {
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(err) => {
                    warn!(service = %self.service, account, error = %err, "keychain delete failed");
                }
            }
        }
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.read(ACCESS_ACCOUNT)
    }

    fn set_access_token(&self, token: &str) {
        self.write(ACCESS_ACCOUNT, token);
    }

    fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_ACCOUNT)
    }

    fn set_refresh_token(&self, token: &str) {
        self.write(REFRESH_ACCOUNT, token);
    }

    fn clear_all(&self) {
        self.delete(ACCESS_ACCOUNT);
        self.delete(REFRESH_ACCOUNT);
    }
}
