//! Wire types for the Shopfront commerce API
//!
//! Response payloads deserialize from the API's camelCase JSON; request
//! bodies serialize with snake_case field names, matching what the backend
//! accepts. Monetary amounts are decimal-as-string on the wire and stay
//! `String` here so no precision is lost in transit.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod common;
pub mod order;

pub use account::{
    Company, LoginRequest, LoginResponse, RegisterRequest, TokenRefreshRequest,
    TokenRefreshResponse, User,
};
pub use cart::{AddToCartRequest, Cart, CartItem, CheckoutRequest, UpdateQuantityRequest};
pub use catalog::{Category, GstCode, Product, ProductVariant};
pub use common::{OrderFilters, Paginated, ProductFilters};
pub use order::{
    Address, CancelOrderRequest, Customer, CustomerType, Order, OrderItem, OrderStatus,
    PaymentStatus,
};
