//! Typed endpoint bindings for the commerce API
//!
//! One binding struct per API domain, all sharing a single [`ApiClient`] so
//! every call benefits from the same credentials and refresh coordination.

mod auth;
mod cart;
mod catalog;
mod orders;
mod products;

use std::sync::Arc;

pub use auth::AuthApi;
pub use cart::CartApi;
pub use catalog::CategoriesApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
use shopfront_domain::Result;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::credentials::CredentialStore;
use crate::navigation::Navigator;

/// Facade bundling the shared client with every endpoint binding
pub struct Shopfront {
    client: Arc<ApiClient>,
    products: ProductsApi,
    categories: CategoriesApi,
    cart: CartApi,
    orders: OrdersApi,
    auth: AuthApi,
}

impl Shopfront {
    /// Build the full client surface from a configuration and the two
    /// injected capabilities.
    ///
    /// # Errors
    /// Returns `ShopfrontError::Config` if the underlying client cannot be
    /// built.
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let client = Arc::new(ApiClient::new(config, store, navigator)?);
        Ok(Self::from_client(client))
    }

    /// Build the facade around an existing client.
    #[must_use]
    pub fn from_client(client: Arc<ApiClient>) -> Self {
        Self {
            products: ProductsApi::new(Arc::clone(&client)),
            categories: CategoriesApi::new(Arc::clone(&client)),
            cart: CartApi::new(Arc::clone(&client)),
            orders: OrdersApi::new(Arc::clone(&client)),
            auth: AuthApi::new(Arc::clone(&client)),
            client,
        }
    }

    /// The shared request coordinator.
    #[must_use]
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Product catalog endpoints.
    #[must_use]
    pub fn products(&self) -> &ProductsApi {
        &self.products
    }

    /// Category endpoints.
    #[must_use]
    pub fn categories(&self) -> &CategoriesApi {
        &self.categories
    }

    /// Cart endpoints.
    #[must_use]
    pub fn cart(&self) -> &CartApi {
        &self.cart
    }

    /// Order endpoints.
    #[must_use]
    pub fn orders(&self) -> &OrdersApi {
        &self.orders
    }

    /// Account and authentication endpoints.
    #[must_use]
    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }
}
