//! Category endpoints

use std::sync::Arc;

use shopfront_domain::{Category, Paginated, Result};

use crate::api::ApiClient;

const CATEGORIES_PATH: &str = "/commerce/categories/";

/// Bindings for `/commerce/categories/`
pub struct CategoriesApi {
    client: Arc<ApiClient>,
}

impl CategoriesApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All categories (first page of the flat listing).
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn list(&self) -> Result<Vec<Category>> {
        let page: Paginated<Category> = self.client.get(CATEGORIES_PATH).await?;
        Ok(page.results)
    }

    /// The category tree (top-level categories with nesting resolved by the
    /// API).
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn tree(&self) -> Result<Vec<Category>> {
        self.client.get(&format!("{CATEGORIES_PATH}tree/")).await
    }

    /// Fetch a single category by its slug.
    ///
    /// # Errors
    /// Returns a normalized [`shopfront_domain::ShopfrontError`].
    pub async fn by_slug(&self, slug: &str) -> Result<Category> {
        self.client.get(&format!("{CATEGORIES_PATH}{slug}/")).await
    }
}
