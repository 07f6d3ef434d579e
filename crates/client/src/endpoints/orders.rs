//! Order history endpoints

use std::sync::Arc;

use shopfront_domain::{CancelOrderRequest, Order, OrderFilters, Paginated, Result};

use crate::api::ApiClient;

const ORDERS_PATH: &str = "/commerce/orders/";

/// Bindings for `/commerce/orders/`
pub struct OrdersApi {
    client: Arc<ApiClient>,
}

impl OrdersApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Paginated order history with optional filters.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn list(&self, filters: &OrderFilters) -> Result<Paginated<Order>> {
        self.client.get_with_query(ORDERS_PATH, filters.to_query()).await
    }

    /// Fetch a single order by id.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn by_id(&self, id: &str) -> Result<Order> {
        self.client.get(&format!("{ORDERS_PATH}{id}/")).await
    }

    /// Cancel an order, optionally recording a reason.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn cancel(&self, id: &str, reason: Option<String>) -> Result<Order> {
        self.client
            .post(&format!("{ORDERS_PATH}{id}/cancel/"), &CancelOrderRequest { reason })
            .await
    }
}
