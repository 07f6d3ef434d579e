//! Cart types and cart mutation request bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{Product, ProductVariant};

/// The current user's shopping cart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    pub items: Vec<CartItem>,
    pub item_count: u32,
    /// Decimal as string
    pub subtotal: String,
    pub gst_amount: String,
    pub total: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// A line in the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub product: Product,
    pub variant: Option<ProductVariant>,
    pub quantity: u32,
    pub unit_price: String,
    pub gst_amount: String,
    pub line_total: String,
}

/// Request body for adding an item to the cart (snake_case on the wire)
#[derive(Debug, Clone, Serialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    pub quantity: u32,
}

/// Request body for changing a cart line's quantity
#[derive(Debug, Clone, Serialize)]
pub struct UpdateQuantityRequest {
    pub quantity: u32,
}

/// Request body for converting the cart into an order
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    pub shipping_address_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_id: Option<String>,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
