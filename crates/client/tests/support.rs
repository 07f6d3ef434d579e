//! Shared helpers for client integration tests.
//!
//! Each integration test binary pulls in the subset it needs.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use shopfront_client::testing::RecordingNavigator;
use shopfront_client::{ApiClient, ClientConfig, MemoryCredentialStore, Shopfront};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Everything a test needs: the mock API, the observable capabilities, and
/// the full client surface wired together.
pub struct TestHarness {
    pub server: MockServer,
    pub store: Arc<MemoryCredentialStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub shop: Shopfront,
}

impl TestHarness {
    pub fn client(&self) -> &Arc<ApiClient> {
        self.shop.client()
    }
}

/// Harness with a seeded access/refresh token pair.
pub async fn harness_with_tokens(access: &str, refresh: &str) -> TestHarness {
    harness(MemoryCredentialStore::with_tokens(access, refresh)).await
}

/// Route client tracing into the test output; repeated calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Harness around an arbitrary starting store state.
pub async fn harness(store: MemoryCredentialStore) -> TestHarness {
    init_tracing();
    let server = MockServer::start().await;
    let store = Arc::new(store);
    let navigator = Arc::new(RecordingNavigator::new());

    let config = ClientConfig::new(server.uri()).expect("config");
    let shop = Shopfront::new(
        config,
        Arc::clone(&store) as Arc<dyn shopfront_client::CredentialStore>,
        Arc::clone(&navigator) as Arc<dyn shopfront_client::Navigator>,
    )
    .expect("client");

    TestHarness { server, store, navigator, shop }
}

/// Harness with a custom per-request timeout (for transport-failure tests).
pub async fn harness_with_timeout(access: &str, refresh: &str, timeout: Duration) -> TestHarness {
    init_tracing();
    let server = MockServer::start().await;
    let store = Arc::new(MemoryCredentialStore::with_tokens(access, refresh));
    let navigator = Arc::new(RecordingNavigator::new());

    let config = ClientConfig::new(server.uri()).expect("config").with_timeout(timeout);
    let shop = Shopfront::new(
        config,
        Arc::clone(&store) as Arc<dyn shopfront_client::CredentialStore>,
        Arc::clone(&navigator) as Arc<dyn shopfront_client::Navigator>,
    )
    .expect("client");

    TestHarness { server, store, navigator, shop }
}

/// Mount a GET endpoint that rejects `old_token` with 401 and serves `body`
/// for `new_token`.
pub async fn mount_token_gated_get(
    server: &MockServer,
    endpoint: &str,
    old_token: &str,
    new_token: &str,
    body: Value,
) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header("Authorization", format!("Bearer {old_token}")))
        .respond_with(ResponseTemplate::new(401))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header("Authorization", format!("Bearer {new_token}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount the refresh endpoint: `refresh_token` exchanges for `new_access`
/// after `delay`. `expected_calls` is verified when the server drops.
pub async fn mount_refresh_success(
    server: &MockServer,
    refresh_token: &str,
    new_access: &str,
    delay: Duration,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path("/accounts/auth/token/refresh/"))
        .and(wiremock::matchers::body_json(json!({"refresh": refresh_token})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": new_access})).set_delay(delay),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Number of requests the server has seen for `endpoint`.
pub async fn requests_to(server: &MockServer, endpoint: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == endpoint)
        .count()
}

/// Paths of requests carrying the given bearer token, in arrival order.
pub async fn paths_with_bearer(server: &MockServer, token: &str) -> Vec<String> {
    let expected = format!("Bearer {token}");
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| {
            request
                .headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value == expected)
        })
        .map(|request| request.url.path().to_string())
        .collect()
}

/// Minimal product payload in the API's camelCase wire shape.
pub fn product_json(id: &str, sku: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "sku": sku,
        "barcode": null,
        "name": "Kopi O",
        "slug": slug,
        "description": null,
        "shortDescription": null,
        "basePrice": "1.80",
        "costPrice": null,
        "compareAtPrice": null,
        "gstCode": "SR",
        "gstRate": "9.00",
        "imageUrl": null,
        "category": null,
        "variants": [],
        "isActive": true,
        "createdAt": "2025-06-01T08:00:00Z",
        "updatedAt": "2025-06-02T08:00:00Z"
    })
}

/// Minimal cart payload with a single line.
pub fn cart_json(id: &str) -> Value {
    json!({
        "id": id,
        "items": [{
            "id": "line-1",
            "product": product_json("prod-1", "KOPI-001", "kopi-o"),
            "variant": null,
            "quantity": 2,
            "unitPrice": "1.80",
            "gstAmount": "0.32",
            "lineTotal": "3.60"
        }],
        "itemCount": 2,
        "subtotal": "3.60",
        "gstAmount": "0.32",
        "total": "3.92",
        "expiresAt": null
    })
}

/// Minimal customer payload.
fn customer_json() -> Value {
    json!({
        "id": "cust-1",
        "email": "ops@example.sg",
        "firstName": "Wei",
        "lastName": "Tan",
        "phone": "+6591234567",
        "customerType": "retail",
        "companyName": null,
        "companyUen": null,
        "consentMarketing": false,
        "consentAnalytics": true
    })
}

/// Minimal address payload.
fn address_json() -> Value {
    json!({
        "recipientName": "Wei Tan",
        "phone": "+6591234567",
        "addressLine1": "71 Ayer Rajah Crescent",
        "addressLine2": null,
        "postalCode": "139951",
        "unitNumber": "#02-18",
        "isDefault": true
    })
}

/// Minimal order payload.
pub fn order_json(id: &str, order_number: &str) -> Value {
    json!({
        "id": id,
        "orderNumber": order_number,
        "status": "pending",
        "paymentStatus": "pending",
        "customer": customer_json(),
        "items": [],
        "shippingAddress": address_json(),
        "billingAddress": address_json(),
        "subtotal": "3.60",
        "gstAmount": "0.32",
        "shippingAmount": "2.00",
        "totalAmount": "5.92",
        "notes": null,
        "createdAt": "2025-06-03T02:00:00Z",
        "updatedAt": "2025-06-03T02:00:00Z"
    })
}

/// Minimal user payload.
pub fn user_json(email: &str) -> Value {
    json!({
        "id": "user-1",
        "email": email,
        "firstName": "Wei",
        "lastName": "Tan",
        "phone": "+6591234567",
        "isActive": true,
        "company": {
            "id": "co-1",
            "name": "Tan Trading",
            "legalName": "Tan Trading Pte Ltd",
            "uen": "201812345K",
            "gstRegistered": true,
            "gstRegistrationNumber": "M90312345A"
        }
    })
}
