//! Pagination envelope and list-query filters

use serde::{Deserialize, Serialize};

use super::catalog::GstCode;
use super::order::{OrderStatus, PaymentStatus};

/// Paginated list envelope returned by every collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Items on this page
    pub results: Vec<T>,
}

/// Query filters for the product listing endpoint
///
/// All fields are optional; unset fields are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Free-text search over name, SKU, and description
    pub search: Option<String>,
    /// Category slug
    pub category: Option<String>,
    /// Minimum base price (inclusive)
    pub min_price: Option<f64>,
    /// Maximum base price (inclusive)
    pub max_price: Option<f64>,
    /// GST classification code
    pub gst_code: Option<GstCode>,
    /// Restrict to featured products
    pub is_featured: Option<bool>,
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub page_size: Option<u32>,
    /// Ordering expression (e.g. `-created_at`)
    pub ordering: Option<String>,
}

impl ProductFilters {
    /// Render the set fields as query-string pairs.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "search", self.search.as_deref());
        push_opt(&mut query, "category", self.category.as_deref());
        if let Some(min) = self.min_price {
            query.push(("min_price".to_string(), min.to_string()));
        }
        if let Some(max) = self.max_price {
            query.push(("max_price".to_string(), max.to_string()));
        }
        if let Some(code) = self.gst_code {
            query.push(("gst_code".to_string(), code.as_str().to_string()));
        }
        if let Some(featured) = self.is_featured {
            query.push(("is_featured".to_string(), featured.to_string()));
        }
        push_num(&mut query, "page", self.page);
        push_num(&mut query, "page_size", self.page_size);
        push_opt(&mut query, "ordering", self.ordering.as_deref());
        query
    }
}

/// Query filters for the order history endpoint
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    /// Fulfilment status
    pub status: Option<OrderStatus>,
    /// Payment status
    pub payment_status: Option<PaymentStatus>,
    /// Earliest order date (ISO 8601 date)
    pub date_from: Option<String>,
    /// Latest order date (ISO 8601 date)
    pub date_to: Option<String>,
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub page_size: Option<u32>,
}

impl OrderFilters {
    /// Render the set fields as query-string pairs.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(payment) = self.payment_status {
            query.push(("payment_status".to_string(), payment.as_str().to_string()));
        }
        push_opt(&mut query, "date_from", self.date_from.as_deref());
        push_opt(&mut query, "date_to", self.date_to.as_deref());
        push_num(&mut query, "page", self.page);
        push_num(&mut query, "page_size", self.page_size);
        query
    }
}

fn push_opt(query: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        query.push((key.to_string(), value.to_string()));
    }
}

fn push_num(query: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    if let Some(value) = value {
        query.push((key.to_string(), value.to_string()));
    }
}
