//! Account and authentication endpoints
//!
//! Login and registration persist the returned token pair into the shared
//! credential store; logout clears it even when the API call fails, so a
//! dead session never leaves stale credentials behind.

use std::sync::Arc;

use shopfront_domain::{LoginRequest, LoginResponse, RegisterRequest, Result, User};
use tracing::{debug, info};

use crate::api::ApiClient;

/// Bindings for `/accounts/`
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Password login; stores the returned token pair on success.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        debug!(email = %credentials.email, "logging in");
        let response: LoginResponse =
            self.client.post("/accounts/auth/login/", credentials).await?;

        let store = self.client.credentials();
        store.set_access_token(&response.access);
        store.set_refresh_token(&response.refresh);
        info!("login succeeded");

        Ok(response)
    }

    /// Register a new account; stores the returned token pair on success.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn register(&self, data: &RegisterRequest) -> Result<LoginResponse> {
        debug!(email = %data.email, "registering account");
        let response: LoginResponse = self.client.post("/accounts/users/", data).await?;

        let store = self.client.credentials();
        store.set_access_token(&response.access);
        store.set_refresh_token(&response.refresh);
        info!("registration succeeded");

        Ok(response)
    }

    /// Logout: asks the API to blacklist the token, then clears stored
    /// credentials regardless of the API outcome.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`] when the API
    /// call failed; the local session is cleared either way.
    pub async fn logout(&self) -> Result<()> {
        let result = self.client.post_empty::<()>("/accounts/auth/logout/").await;
        self.client.credentials().clear_all();
        info!("local session cleared");
        result
    }

    /// The current user's profile.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn me(&self) -> Result<User> {
        self.client.get("/accounts/users/me/").await
    }
}
