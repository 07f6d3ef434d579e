//! Replayable request descriptions

use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Description of one API call, complete enough to be replayed after a
/// token refresh
#[derive(Debug)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API base URL, starting with `/`
    pub path: String,
    /// Query-string pairs
    pub query: Vec<(String, String)>,
    /// Optional JSON body
    pub body: Option<Value>,
    /// Whether this request has already used its single post-refresh retry.
    /// The request value is owned by the coordinator once submitted, so the
    /// marker involves no shared mutation.
    pub(crate) retried: bool,
}

impl ApiRequest {
    /// Create a request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, retried: false }
    }

    /// GET request for `path`.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request for `path` (attach a body with [`Self::with_body`]).
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PATCH request for `path`.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// DELETE request for `path`.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach query-string pairs.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status plus decoded JSON body of one HTTP exchange.
///
/// 204/205 and empty bodies decode to `Value::Null`; a non-JSON body is kept
/// as a JSON string so error normalization can surface it as a message.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_method_and_path() {
        let request = ApiRequest::get("/commerce/products/");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/commerce/products/");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
        assert!(!request.retried);
    }

    #[test]
    fn builder_helpers_attach_query_and_body() {
        let request = ApiRequest::post("/commerce/cart/add_item/")
            .with_query(vec![("verbose".to_string(), "1".to_string())])
            .with_body(serde_json::json!({"product_id": "p1", "quantity": 1}));

        assert_eq!(request.query.len(), 1);
        assert_eq!(request.body.unwrap()["product_id"], "p1");
    }
}
