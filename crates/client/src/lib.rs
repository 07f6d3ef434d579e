//! # Shopfront Client
//!
//! Authenticated client for the Shopfront commerce API.
//!
//! This crate contains:
//! - The authenticated request coordinator ([`api::ApiClient`]): bearer
//!   credential attachment, transparent single-flight token refresh with
//!   FIFO replay of requests queued behind the exchange, and forced logout
//!   on unrecoverable authorization failure
//! - Typed endpoint bindings for products, categories, cart, orders, and
//!   accounts ([`endpoints`])
//! - Credential storage backends ([`credentials`]) and the navigation
//!   capability used for the login redirect ([`navigation`])
//!
//! ## Architecture
//! - Pure payload types live in `shopfront-domain`
//! - All side effects (storage writes, navigation) go through injectable
//!   capability traits so the coordinator's decision logic stays testable

pub mod api;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod http;
pub mod navigation;
pub mod testing;

// Re-export commonly used items
pub use api::{ApiClient, ApiRequest};
pub use config::ClientConfig;
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use endpoints::Shopfront;
pub use navigation::{Navigator, NoopNavigator};
// The domain crate is the vocabulary of every endpoint; re-export it whole.
pub use shopfront_domain as domain;
