//! Product catalog endpoints

use std::sync::Arc;

use shopfront_domain::{Paginated, Product, ProductFilters, Result};

use crate::api::ApiClient;

const PRODUCTS_PATH: &str = "/commerce/products/";

/// Bindings for `/commerce/products/`
pub struct ProductsApi {
    client: Arc<ApiClient>,
}

impl ProductsApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Paginated product listing with optional filters.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn list(&self, filters: &ProductFilters) -> Result<Paginated<Product>> {
        self.client.get_with_query(PRODUCTS_PATH, filters.to_query()).await
    }

    /// Fetch a single product by its slug.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn by_slug(&self, slug: &str) -> Result<Product> {
        self.client.get(&format!("{PRODUCTS_PATH}{slug}/")).await
    }

    /// Featured products for the storefront landing page.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn featured(&self, limit: u32) -> Result<Vec<Product>> {
        let filters = ProductFilters {
            is_featured: Some(true),
            page_size: Some(limit),
            ..ProductFilters::default()
        };
        let page: Paginated<Product> =
            self.client.get_with_query(PRODUCTS_PATH, filters.to_query()).await?;
        Ok(page.results)
    }

    /// Free-text product search.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn search(&self, query: &str) -> Result<Vec<Product>> {
        let filters =
            ProductFilters { search: Some(query.to_string()), ..ProductFilters::default() };
        let page: Paginated<Product> =
            self.client.get_with_query(PRODUCTS_PATH, filters.to_query()).await?;
        Ok(page.results)
    }
}
