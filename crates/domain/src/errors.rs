//! Error types surfaced to callers of the Shopfront client
//!
//! Every failure a caller can observe is normalized into [`ShopfrontError`];
//! raw transport errors never cross the crate boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback error code used when the API response carries no recognizable
/// error envelope.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// Error code used when a successful response body cannot be decoded into
/// the caller's expected type.
pub const DECODE_ERROR_CODE: &str = "DECODE_ERROR";

/// Normalized error for all Shopfront client operations
///
/// `Clone` is deliberate: a single failed token refresh rejects every request
/// queued behind it with the same error value.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "error")]
pub enum ShopfrontError {
    /// Authorization failure that could not be resolved by a token refresh:
    /// no refresh token stored, the refresh exchange itself failed, or an
    /// already-retried request was rejected again.
    #[error("session expired: {0}")]
    AuthExpired(String),

    /// Any non-2xx, non-authorization response from the remote API.
    #[error("api error [{}]: {}", .0.code, .0.message)]
    Api(ApiFault),

    /// Transport failure (timeout, connection refused, DNS) with no response.
    #[error("network error: {0}")]
    Network(String),

    /// Client construction or configuration failure.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for Shopfront operations
pub type Result<T> = std::result::Result<T, ShopfrontError>;

/// Machine-readable fault payload extracted from the API's error envelope
///
/// The remote API wraps failures as
/// `{"status": "error", "error": {"code", "message", "details"}}`; responses
/// outside that shape fall back to [`UNKNOWN_ERROR_CODE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFault {
    /// Machine-readable error code (e.g. `VALIDATION_ERROR`)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Optional field-level validation details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldDetail>>,
}

/// A single field-level validation failure inside an [`ApiFault`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDetail {
    /// Name of the offending request field
    pub field: String,
    /// What was wrong with it
    pub message: String,
}

impl ApiFault {
    /// Build a fault from a non-2xx response body.
    ///
    /// Recognizes the API's standard error envelope; anything else (plain
    /// text, empty body, unexpected JSON) is normalized to the fallback code
    /// with the HTTP status folded into the message.
    #[must_use]
    pub fn from_response(status: u16, body: &serde_json::Value) -> Self {
        if let Some(error) = body.get("error") {
            let code = error
                .get("code")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(UNKNOWN_ERROR_CODE)
                .to_string();
            let message = error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| format!("request failed with status {status}"), String::from);
            let details = error
                .get("details")
                .and_then(|d| serde_json::from_value::<Vec<FieldDetail>>(d.clone()).ok());
            return Self { code, message, details };
        }

        let message = match body {
            serde_json::Value::String(text) if !text.is_empty() => text.clone(),
            _ => format!("request failed with status {status}"),
        };

        Self { code: UNKNOWN_ERROR_CODE.to_string(), message, details: None }
    }

    /// Build a fault for a successful response whose body could not be
    /// decoded into the expected type.
    #[must_use]
    pub fn decode(err: &serde_json::Error) -> Self {
        Self {
            code: DECODE_ERROR_CODE.to_string(),
            message: format!("failed to decode response body: {err}"),
            details: None,
        }
    }
}

impl ShopfrontError {
    /// True when this error carries the forced-logout semantics of an
    /// unrecoverable authorization failure.
    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired(_))
    }
}
