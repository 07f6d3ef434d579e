//! Cart endpoints

use std::sync::Arc;

use shopfront_domain::{
    AddToCartRequest, Cart, CheckoutRequest, Order, Result, UpdateQuantityRequest,
};

use crate::api::ApiClient;

/// Bindings for `/commerce/cart/`
pub struct CartApi {
    client: Arc<ApiClient>,
}

impl CartApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// The current user's cart.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn current(&self) -> Result<Cart> {
        self.client.get("/commerce/cart/current/").await
    }

    /// Add an item; returns the updated cart.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn add_item(&self, request: &AddToCartRequest) -> Result<Cart> {
        self.client.post("/commerce/cart/add_item/", request).await
    }

    /// Change a line's quantity; returns the updated cart.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn update_quantity(&self, item_id: &str, quantity: u32) -> Result<Cart> {
        self.client
            .patch(&format!("/commerce/cart/items/{item_id}/"), &UpdateQuantityRequest { quantity })
            .await
    }

    /// Remove a line from the cart.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn remove_item(&self, item_id: &str) -> Result<()> {
        self.client.delete(&format!("/commerce/cart/items/{item_id}/")).await
    }

    /// Empty the cart.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn clear(&self) -> Result<()> {
        self.client.delete("/commerce/cart/clear/").await
    }

    /// Convert the cart into an order.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<Order> {
        self.client.post("/commerce/cart/checkout/", request).await
    }
}
