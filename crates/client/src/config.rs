//! Client configuration
//!
//! Loads client settings from environment variables with sensible defaults.
//!
//! ## Environment Variables
//! - `SHOPFRONT_API_URL`: Base URL of the commerce API (default
//!   `http://localhost:8000/api/v1`)
//! - `SHOPFRONT_API_TIMEOUT_SECS`: Per-request timeout in seconds (default 15)
//!
//! A `.env` file in the working directory is honored via `dotenvy`.

use std::time::Duration;

use shopfront_domain::{Result, ShopfrontError};

const ENV_API_URL: &str = "SHOPFRONT_API_URL";
const ENV_API_TIMEOUT: &str = "SHOPFRONT_API_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the Shopfront API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API, without a trailing slash
    /// (e.g. `https://shop.example.sg/api/v1`)
    pub base_url: String,
    /// Fixed timeout applied to every HTTP request
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL with the default timeout.
    ///
    /// # Errors
    /// Returns `ShopfrontError::Config` if the URL does not parse.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        Ok(Self { base_url, timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) })
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    /// Returns `ShopfrontError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is not an error; explicit env vars still apply.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = match lookup(ENV_API_URL) {
            Some(url) => normalize_base_url(url)?,
            None => DEFAULT_API_URL.to_string(),
        };

        let timeout = match lookup(ENV_API_TIMEOUT) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    ShopfrontError::Config(format!("invalid {ENV_API_TIMEOUT}: {e}"))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, timeout })
    }
}

/// Validate the base URL and strip any trailing slash so path joins stay
/// predictable.
fn normalize_base_url(raw: String) -> Result<String> {
    let parsed = url::Url::parse(&raw)
        .map_err(|e| ShopfrontError::Config(format!("invalid API base URL {raw:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ShopfrontError::Config(format!(
            "unsupported API base URL scheme {:?}",
            parsed.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
