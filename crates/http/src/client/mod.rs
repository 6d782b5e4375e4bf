//! TonTax HTTP client
//!
//! [`SessionClient`] issues requests against the fixed-origin API, attaching
//! bearer authorization when an access token is held and recovering exactly
//! once from an expired access token before giving up. Callers inspect
//! response statuses themselves; only transport failures surface as errors
//! from the send path.

pub mod auth;
pub mod error;
pub mod store;
pub mod tax;
pub mod wallet;

use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode, header};
use tracing::{debug, warn};

use crate::types::{RefreshRequest, TokenPair, TokensResponse};
use error::ClientError;
use store::{Credentials, MemoryTokenStore, TokenStore};

/// Callback invoked when the session ends irrecoverably (failed renewal
/// behind an authorized request). Injected at construction; the frontend
/// uses it to fall back to the login view.
pub type SessionEndHook = Rc<dyn Fn()>;

/// TonTax API client with automatic session renewal
pub struct SessionClient {
    client: Client,
    base_url: String,
    credentials: Mutex<Credentials>,
    store: Rc<dyn TokenStore>,
    on_session_end: Option<SessionEndHook>,
}

impl SessionClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> SessionClientBuilder {
        SessionClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current credential pair (in-memory copy)
    pub fn credentials(&self) -> Credentials {
        self.credentials
            .lock()
            .expect("Failed to acquire credential lock")
            .clone()
    }

    /// Whether an access token is currently held
    pub fn is_authenticated(&self) -> bool {
        self.credentials().access.is_some()
    }

    /// Replace the credential pair, in durable storage and in memory.
    /// Always a whole-pair overwrite.
    pub(crate) fn set_credentials(&self, credentials: Credentials) {
        self.store.save(&credentials);
        *self
            .credentials
            .lock()
            .expect("Failed to acquire credential lock") = credentials;
    }

    /// Unconditional session teardown.
    ///
    /// Clears the pair from memory and durable storage together; a no-op
    /// when no credentials are held.
    pub fn logout(&self) {
        self.store.clear();
        *self
            .credentials
            .lock()
            .expect("Failed to acquire credential lock") = Credentials::default();
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials().access {
            Some(access) => request.header(header::AUTHORIZATION, format!("Bearer {access}")),
            None => request,
        }
    }

    /// Exchange the refresh token for a new credential pair.
    ///
    /// Issues at most one POST to `/refresh/`; with no refresh token held it
    /// fails immediately without touching the network. On success both
    /// tokens are replaced together, in memory and in durable storage. On
    /// any other outcome the whole session is torn down before the failure
    /// is reported; transport errors never escape this method.
    pub async fn renew(&self) -> Result<(), ClientError> {
        let Some(refresh) = self.credentials().refresh else {
            warn!("no refresh token available");
            return Err(ClientError::NoRefreshToken);
        };

        let request = self
            .request(reqwest::Method::POST, "/refresh/")
            .json(&RefreshRequest {
                refresh_token: refresh,
            });

        match renewal_outcome(request).await {
            Ok(tokens) => {
                self.set_credentials(Credentials::new(tokens.access, tokens.refresh));
                debug!("session tokens renewed");
                Ok(())
            }
            Err(reason) => {
                warn!(%reason, "token renewal failed, tearing down session");
                self.logout();
                Err(ClientError::RenewalRejected(reason))
            }
        }
    }

    /// Issue a request with bearer authorization, renewing the session once
    /// on 401/403 and retrying the request once after a successful renewal.
    ///
    /// Returns whatever response resulted from the (possibly retried)
    /// request. When renewal fails the injected session-end hook fires and
    /// the original failed response is returned. Never more than one renewal
    /// and one retried request per call.
    pub async fn send_with_auth(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        // Clone taken before the first send so the request can be re-issued
        // after renewal. Every request this client builds carries a JSON or
        // empty body, which is always cloneable.
        let retry = request.try_clone();
        let response = self.authorized(request).send().await?;

        if !is_auth_failure(response.status()) {
            return Ok(response);
        }

        debug!(status = %response.status(), "access token rejected, attempting renewal");
        if self.renew().await.is_ok()
            && self.is_authenticated()
            && let Some(retry) = retry
        {
            return Ok(self.authorized(retry).send().await?);
        }

        self.notify_session_end();
        Ok(response)
    }

    /// Execute an authorized request and parse the response body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send_with_auth(request).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(ClientError::from_status(status, error_message(response).await))
        }
    }

    /// Execute an unauthenticated request and parse the response body
    pub(crate) async fn execute_public<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(ClientError::from_status(status, error_message(response).await))
        }
    }

    fn notify_session_end(&self) {
        if let Some(hook) = &self.on_session_end {
            hook();
        }
    }
}

fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// One renewal attempt, with every failure mode collapsed into a reason
/// string for the teardown path.
async fn renewal_outcome(request: reqwest::RequestBuilder) -> Result<TokenPair, String> {
    let response = request.send().await.map_err(|e| e.to_string())?;
    let status = response.status();

    if !status.is_success() {
        return Err(error_message(response).await);
    }

    let body: TokensResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.tokens)
}

/// Best-effort extraction of the backend error message.
///
/// The backend answers `{"error": ...}` for domain errors, `{"detail": ...}`
/// for auth errors and `{"field": ["msg", ...]}` for validation errors.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| status.to_string());

    let Ok(body) = serde_json::from_str::<serde_json::Value>(&text) else {
        return text;
    };

    if let Some(message) = body
        .get("error")
        .or_else(|| body.get("detail"))
        .and_then(|v| v.as_str())
    {
        return message.to_string();
    }

    if let Some(map) = body.as_object() {
        let messages: Vec<String> = map
            .values()
            .flat_map(|value| match value {
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                serde_json::Value::String(message) => vec![message.clone()],
                _ => Vec::new(),
            })
            .collect();
        if !messages.is_empty() {
            return messages.join(", ");
        }
    }

    text
}

/// Builder for [`SessionClient`]
pub struct SessionClientBuilder {
    base_url: Option<String>,
    store: Option<Rc<dyn TokenStore>>,
    on_session_end: Option<SessionEndHook>,
    timeout: Option<Duration>,
}

impl SessionClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            store: None,
            on_session_end: None,
            timeout: None,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the durable token store; defaults to an in-memory store
    pub fn token_store(mut self, store: Rc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Register the hook invoked when the session ends irrecoverably
    pub fn on_session_end(mut self, hook: SessionEndHook) -> Self {
        self.on_session_end = Some(hook);
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client. The in-memory credential copy is initialized from
    /// the token store.
    pub fn build(self) -> Result<SessionClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?
            .trim_end_matches('/')
            .to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent("tontax-client/0.1.0");
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new().build()?
        };

        let store = self.store.unwrap_or_else(|| Rc::new(MemoryTokenStore::new()));
        let credentials = store.load();

        Ok(SessionClient {
            client,
            base_url,
            credentials: Mutex::new(credentials),
            store,
            on_session_end: self.on_session_end,
        })
    }
}

impl Default for SessionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
