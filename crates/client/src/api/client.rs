//! Authenticated API client with single-flight token refresh
//!
//! Every outbound call goes through [`ApiClient::send`], which attaches the
//! stored access token and recovers from exactly one class of failure: an
//! expired access credential (HTTP 401). Recovery runs at most one refresh
//! exchange at a time; requests failing while an exchange is in flight are
//! queued and replayed in arrival order once it settles. Anything else —
//! non-auth API errors, transport failures, a second 401 on the same
//! request — propagates to the caller normalized, never retried twice.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use reqwest::header;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shopfront_domain::{
    ApiFault, Result, ShopfrontError, TokenRefreshRequest, TokenRefreshResponse,
};
use tracing::{debug, info, warn};

use super::request::{ApiRequest, RawResponse};
use crate::config::ClientConfig;
use crate::credentials::CredentialStore;
use crate::http::HttpClient;
use crate::navigation::{Navigator, NoopNavigator};

/// Path of the token refresh endpoint. Called as a plain request: no bearer
/// header, and never routed through the 401 recovery path.
pub const TOKEN_REFRESH_PATH: &str = "/accounts/auth/token/refresh/";

/// A request parked while a refresh exchange is in flight, together with the
/// channel that settles its caller
struct PendingRequest {
    request: ApiRequest,
    tx: tokio::sync::oneshot::Sender<Result<RawResponse>>,
}

/// Single-flight refresh state: the in-progress flag plus the FIFO queue of
/// requests waiting on the exchange
#[derive(Default)]
struct RefreshState {
    in_progress: bool,
    queue: VecDeque<PendingRequest>,
}

/// Outcome of the atomic single-flight check: either this caller leads the
/// exchange, or it parked its request and waits for the leader
enum ExchangeRole {
    Leader(ApiRequest),
    Queued(tokio::sync::oneshot::Receiver<Result<RawResponse>>),
}

/// Authenticated request coordinator for the commerce API
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    refresh: Mutex<RefreshState>,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// # Errors
    /// Returns `ShopfrontError::Config` if the HTTP client cannot be built.
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            store,
            navigator,
            refresh: Mutex::new(RefreshState::default()),
        })
    }

    /// Create a builder for fluent configuration.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The credential store this client reads and writes.
    #[must_use]
    pub fn credentials(&self) -> Arc<dyn CredentialStore> {
        Arc::clone(&self.store)
    }

    /// Execute a request and decode the response body.
    ///
    /// This is the sole entry point; the typed helpers below all delegate
    /// here.
    ///
    /// # Errors
    /// Returns a normalized [`ShopfrontError`]; see the crate docs for the
    /// taxonomy.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let raw = self.dispatch(request).await?;
        decode(raw)
    }

    /// Execute a GET request.
    ///
    /// # Errors
    /// See [`Self::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::get(path)).await
    }

    /// Execute a GET request with query parameters.
    ///
    /// # Errors
    /// See [`Self::send`].
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T> {
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    /// Execute a POST request with a JSON body.
    ///
    /// # Errors
    /// See [`Self::send`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::post(path).with_body(to_body(body)?)).await
    }

    /// Execute a POST request without a body.
    ///
    /// # Errors
    /// See [`Self::send`].
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::post(path)).await
    }

    /// Execute a PATCH request with a JSON body.
    ///
    /// # Errors
    /// See [`Self::send`].
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::patch(path).with_body(to_body(body)?)).await
    }

    /// Execute a DELETE request.
    ///
    /// # Errors
    /// See [`Self::send`].
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(ApiRequest::delete(path)).await
    }

    /// Issue the request with current credentials and run 401 recovery if
    /// needed.
    async fn dispatch(&self, request: ApiRequest) -> Result<RawResponse> {
        let access = self.store.access_token();
        let raw = self.execute(&request, access.as_deref()).await?;

        if raw.status == StatusCode::UNAUTHORIZED {
            self.recover_unauthorized(request).await
        } else {
            into_api_result(raw)
        }
    }

    /// Authorization-failure handling: bounded retry, single-flight refresh,
    /// queueing behind an in-flight exchange.
    async fn recover_unauthorized(&self, mut request: ApiRequest) -> Result<RawResponse> {
        if request.retried {
            warn!(path = %request.path, "request rejected again after refresh; forcing logout");
            self.force_logout();
            return Err(auth_rejected_after_refresh());
        }
        request.retried = true;

        // The in-progress check and set happen under one lock acquisition,
        // so exactly one caller can become the leader of an exchange.
        let role = {
            let mut state = self.refresh.lock();
            if state.in_progress {
                let (tx, rx) = tokio::sync::oneshot::channel();
                debug!(
                    path = %request.path,
                    queued = state.queue.len() + 1,
                    "refresh exchange in flight; queueing request"
                );
                state.queue.push_back(PendingRequest { request, tx });
                ExchangeRole::Queued(rx)
            } else {
                state.in_progress = true;
                ExchangeRole::Leader(request)
            }
        };

        match role {
            ExchangeRole::Queued(rx) => rx.await.unwrap_or_else(|_| {
                Err(ShopfrontError::Network("token refresh exchange was interrupted".into()))
            }),
            ExchangeRole::Leader(request) => self.lead_refresh_exchange(request).await,
        }
    }

    /// Run the refresh exchange as leader, then settle the queue and the
    /// triggering request.
    async fn lead_refresh_exchange(&self, request: ApiRequest) -> Result<RawResponse> {
        let Some(refresh_token) = self.store.refresh_token() else {
            warn!("authorization failed with no stored refresh token; forcing logout");
            let pending = self.finish_exchange();
            let err = ShopfrontError::AuthExpired("no refresh token available".into());
            self.force_logout();
            reject_pending(pending, &err);
            return Err(err);
        };

        debug!("access token rejected; starting refresh exchange");
        match self.exchange_refresh_token(&refresh_token).await {
            Ok(access) => {
                // Persist before any replay so every retried request (and any
                // call issued after this point) sees the new token.
                self.store.set_access_token(&access);
                let pending = self.finish_exchange();
                info!(drained = pending.len(), "token refresh succeeded; replaying requests");
                for entry in pending {
                    let outcome = self.replay(&entry.request, &access).await;
                    let _ = entry.tx.send(outcome);
                }
                self.replay(&request, &access).await
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed; forcing logout");
                let pending = self.finish_exchange();
                self.force_logout();
                reject_pending(pending, &err);
                Err(err)
            }
        }
    }

    /// Replay a request that already used its single retry. A second 401 here
    /// ends the session instead of starting another exchange.
    async fn replay(&self, request: &ApiRequest, access: &str) -> Result<RawResponse> {
        let raw = self.execute(request, Some(access)).await?;
        if raw.status == StatusCode::UNAUTHORIZED {
            warn!(path = %request.path, "request rejected again after refresh; forcing logout");
            self.force_logout();
            return Err(auth_rejected_after_refresh());
        }
        into_api_result(raw)
    }

    /// POST the refresh token for a new access token.
    async fn exchange_refresh_token(&self, refresh: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, TOKEN_REFRESH_PATH);
        let builder = self
            .http
            .request(Method::POST, &url)
            .json(&TokenRefreshRequest { refresh: refresh.to_string() });

        let response = self.http.send(builder).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShopfrontError::AuthExpired(format!(
                "token refresh rejected with status {status}"
            )));
        }

        let payload: TokenRefreshResponse = response.json().await.map_err(|err| {
            ShopfrontError::AuthExpired(format!("malformed token refresh response: {err}"))
        })?;
        Ok(payload.access)
    }

    /// Issue one HTTP exchange, attaching the bearer header when a token is
    /// provided.
    async fn execute(&self, request: &ApiRequest, access: Option<&str>) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = access {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = self.http.send(builder).await?;
        let status = response.status();
        let body = read_json_body(response).await?;
        Ok(RawResponse { status, body })
    }

    /// Reset the single-flight flag and take ownership of the queue.
    fn finish_exchange(&self) -> VecDeque<PendingRequest> {
        let mut state = self.refresh.lock();
        state.in_progress = false;
        std::mem::take(&mut state.queue)
    }

    /// Clear both stored tokens and send the user to login.
    fn force_logout(&self) {
        info!("clearing stored credentials and redirecting to login");
        self.store.clear_all();
        self.navigator.redirect_to_login();
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ClientConfig>,
    store: Option<Arc<dyn CredentialStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ApiClientBuilder {
    /// Set the client configuration (defaults to [`ClientConfig::default`]).
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credential store (required).
    #[must_use]
    pub fn credentials(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the navigator (defaults to [`NoopNavigator`]).
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `ShopfrontError::Config` if the credential store is missing or
    /// client creation fails.
    pub fn build(self) -> Result<ApiClient> {
        let config = self.config.unwrap_or_default();
        let store = self
            .store
            .ok_or_else(|| ShopfrontError::Config("credential store not set".to_string()))?;
        let navigator = self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator));

        ApiClient::new(config, store, navigator)
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body)
        .map_err(|err| ShopfrontError::Config(format!("failed to serialize request body: {err}")))
}

fn decode<T: DeserializeOwned>(raw: RawResponse) -> Result<T> {
    serde_json::from_value(raw.body).map_err(|err| ShopfrontError::Api(ApiFault::decode(&err)))
}

fn into_api_result(raw: RawResponse) -> Result<RawResponse> {
    if raw.status.is_success() {
        Ok(raw)
    } else {
        Err(ShopfrontError::Api(ApiFault::from_response(raw.status.as_u16(), &raw.body)))
    }
}

async fn read_json_body(response: Response) -> Result<Value> {
    let status = response.status();
    // These status codes have no body by RFC spec
    if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
        return Ok(Value::Null);
    }

    let text = response
        .text()
        .await
        .map_err(|err| ShopfrontError::Network(format!("failed to read response body: {err}")))?;
    if text.is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

fn auth_rejected_after_refresh() -> ShopfrontError {
    ShopfrontError::AuthExpired("access token rejected after refresh".into())
}

fn reject_pending(pending: VecDeque<PendingRequest>, err: &ShopfrontError) {
    for entry in pending {
        let _ = entry.tx.send(Err(err.clone()));
    }
}
