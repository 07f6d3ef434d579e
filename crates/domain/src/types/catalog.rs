//! Catalog types: categories, products, variants

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Singapore GST classification code attached to a product
///
/// The code is an opaque classification here; all rate math happens in the
/// remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstCode {
    /// Standard-rated supply
    #[serde(rename = "SR")]
    Sr,
    /// Zero-rated supply
    #[serde(rename = "ZR")]
    Zr,
    /// Exempt supply
    #[serde(rename = "ES")]
    Es,
    /// Out-of-scope supply
    #[serde(rename = "OS")]
    Os,
}

impl GstCode {
    /// Wire representation of the code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sr => "SR",
            Self::Zr => "ZR",
            Self::Es => "ES",
            Self::Os => "OS",
        }
    }
}

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub parent_id: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

/// A sellable product with its variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    /// Decimal as string, e.g. `"12.90"`
    pub base_price: String,
    pub cost_price: Option<String>,
    pub compare_at_price: Option<String>,
    pub gst_code: GstCode,
    /// Decimal as string, e.g. `"9.00"`
    pub gst_rate: String,
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub variants: Vec<ProductVariant>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A purchasable variant of a product (e.g. colour/size combination)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub sku: String,
    pub name: String,
    /// Option name to value, e.g. `{"color": "Red", "size": "M"}`
    pub options: HashMap<String, String>,
    pub price: String,
    pub cost_price: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}
