//! Order types: statuses, customers, addresses, order lines

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{Product, ProductVariant};

/// Fulfilment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    /// Wire representation of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
        }
    }
}

/// Payment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Authorized,
    Captured,
    Failed,
    Refunded,
}

impl PaymentStatus {
    /// Wire representation of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Authorized => "authorized",
            Self::Captured => "captured",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

/// Pricing tier of the purchasing customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Retail,
    Wholesale,
    Vip,
}

/// The customer an order belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub customer_type: CustomerType,
    pub company_name: Option<String>,
    pub company_uen: Option<String>,
    pub consent_marketing: bool,
    pub consent_analytics: bool,
}

/// Shipping or billing address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub recipient_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub postal_code: String,
    pub unit_number: Option<String>,
    pub is_default: bool,
}

/// A placed order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub subtotal: String,
    pub gst_amount: String,
    pub shipping_amount: String,
    pub total_amount: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line in a placed order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product: Product,
    pub variant: Option<ProductVariant>,
    pub quantity: u32,
    pub unit_price: String,
    /// GST code captured at order time; kept as a plain string since
    /// historical orders may carry retired codes.
    pub gst_code: String,
    pub gst_amount: String,
    pub line_total: String,
}

/// Request body for cancelling an order
#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    //! Unit tests for order status wire formats.
    use super::*;

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Shipped).unwrap(),
            serde_json::Value::String("shipped".into())
        );
        assert_eq!(
            serde_json::to_value(PaymentStatus::Refunded).unwrap(),
            serde_json::Value::String("refunded".into())
        );
    }

    #[test]
    fn status_as_str_matches_serde_rendering() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Returned,
        ] {
            let rendered = serde_json::to_value(status).unwrap();
            assert_eq!(rendered, serde_json::Value::String(status.as_str().into()));
        }
    }
}
