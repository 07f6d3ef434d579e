//! Authenticated request coordination
//!
//! [`ApiClient`] is the single entry point for every call against the
//! commerce API: it attaches bearer credentials, normalizes failures, and
//! transparently recovers from expired access tokens with a single-flight
//! refresh exchange.

mod client;
mod request;

pub use client::{ApiClient, ApiClientBuilder, TOKEN_REFRESH_PATH};
pub use request::ApiRequest;
