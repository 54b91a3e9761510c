// ABOUTME: Authenticated HTTP core: bearer-token header injection and the generic verb methods
// ABOUTME: Single-shot request semantics with explicit timeout and cancellation, no retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Authenticated HTTP client
//!
//! [`ApiClient`] is the one mechanism every endpoint group shares: it reads
//! the bearer token from the injected [`CredentialStore`], attaches it as an
//! `Authorization` header, performs exactly one HTTP round trip against the
//! configured base URL, and normalizes the outcome into a typed value or an
//! [`ApiError`].
//!
//! There is deliberately no retry, caching, batching, or deduplication here:
//! each call is an independent one-shot operation, and idempotence of
//! `PUT`/`DELETE` remains a backend property. What the client does add over
//! a bare HTTP call is a deadline on every request (configured default,
//! per-call override) and an optional per-call [`CancellationToken`], so no
//! caller can be left waiting forever.
//!
//! # Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use halcyon_client::auth::MemoryTokenStore;
//! use halcyon_client::client::ApiClient;
//! use halcyon_client::config::ClientConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(config, Arc::new(MemoryTokenStore::new()))?;
//! let profile: serde_json::Value = client.get("/v1/auth/me").await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::auth::CredentialStore;
use crate::config::ClientConfig;
use crate::errors::{ApiError, ApiResult};

/// Cooperative cancellation handle for a single request
///
/// Cloned freely; cancelling any clone cancels them all. A cancelled token
/// makes the in-flight request resolve to [`ApiError::Cancelled`] without
/// waiting for the response.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    /// Create a token in the not-cancelled state
    #[must_use]
    pub fn new() -> Self {
        Self {
            sender: Arc::new(watch::Sender::new(false)),
        }
    }

    /// Flip the token to cancelled and wake any waiting request
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Whether the token has been cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolve once the token is cancelled
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // wait_for only fails when the sender is dropped, and we hold it
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

/// Per-call overrides for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Replaces the configured total request timeout for this call
    pub timeout: Option<Duration>,
    /// Cancels this call when fired
    pub cancellation: Option<CancellationToken>,
}

impl RequestOptions {
    /// Options with no overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the total timeout for this call
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a cancellation token to this call
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// Request body shapes the client can send
enum RequestBody {
    Empty,
    /// Pre-serialized JSON document
    Json(String),
}

/// Authenticated HTTP client for the Halcyon backend
///
/// Cheap to clone: the underlying connection pool and credential store are
/// shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: reqwest::Client,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Build a client from a validated configuration and a credential store
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when the configuration fails validation
    /// or the underlying HTTP client cannot be constructed.
    pub fn new(config: ClientConfig, credentials: Arc<dyn CredentialStore>) -> ApiResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::config(format!("HTTP client construction failed: {e}")))?;

        Ok(Self {
            config,
            http,
            credentials,
        })
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The credential store this client reads tokens from
    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Header set for an authenticated call
    ///
    /// Contains `Authorization: Bearer <token>` when a token is stored,
    /// otherwise nothing. A missing token is a normal state — unauthenticated
    /// endpoints (login, registration) are called exactly this way.
    ///
    /// # Errors
    /// Returns [`ApiError::Storage`] when the store cannot be read or the
    /// stored token is not a valid header value.
    pub async fn auth_headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(token) = self.credentials.load().await? {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::storage(format!("stored token is not header-safe: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// `GET` a JSON document
    ///
    /// # Errors
    /// See [`ApiError`]; non-2xx responses become [`ApiError::Http`] carrying
    /// the response body verbatim.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get_with(path, RequestOptions::new()).await
    }

    /// `GET` with per-call overrides
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.execute(Method::GET, path, RequestBody::Empty, options)
            .await
    }

    /// `POST` a JSON body
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.post_with(path, body, RequestOptions::new()).await
    }

    /// `POST` a JSON body with per-call overrides
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn post_with<T, B>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.execute(Method::POST, path, Self::json_body(body)?, options)
            .await
    }

    /// `PUT` a JSON body
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.put_with(path, body, RequestOptions::new()).await
    }

    /// `PUT` a JSON body with per-call overrides
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn put_with<T, B>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.execute(Method::PUT, path, Self::json_body(body)?, options)
            .await
    }

    /// `PATCH` a JSON body
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.patch_with(path, body, RequestOptions::new()).await
    }

    /// `PATCH` a JSON body with per-call overrides
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn patch_with<T, B>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.execute(Method::PATCH, path, Self::json_body(body)?, options)
            .await
    }

    /// `DELETE` a resource
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.delete_with(path, RequestOptions::new()).await
    }

    /// `DELETE` with per-call overrides
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn delete_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.execute(Method::DELETE, path, RequestBody::Empty, options)
            .await
    }

    /// `POST` an `application/x-www-form-urlencoded` body
    ///
    /// The login endpoint follows the OAuth2 password-grant body shape and is
    /// the only caller of this; everything else on the API speaks JSON.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn post_form<T, F>(&self, path: &str, form: &F) -> ApiResult<T>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized + Sync,
    {
        let method = Method::POST;
        let url = self.url_for(path);
        let headers = self.auth_headers().await?;

        debug!(method = %method, path, "dispatching form request");
        let started = Instant::now();

        let response = self
            .http
            .request(method.clone(), &url)
            .headers(headers)
            .form(form)
            .send()
            .await?;

        self.finish(method, path, started, response).await
    }

    /// Serialize a JSON request body up front so the wire bytes are exactly
    /// `serde_json::to_string(body)`
    fn json_body<B: Serialize + ?Sized>(body: &B) -> ApiResult<RequestBody> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| ApiError::serialize(format!("request body: {e}")))?;
        Ok(RequestBody::Json(encoded))
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// One HTTP round trip: auth headers, body, deadline, cancellation race
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> ApiResult<T> {
        if let Some(token) = &options.cancellation {
            if token.is_cancelled() {
                return Err(ApiError::cancelled(format!(
                    "{method} {path} cancelled before dispatch"
                )));
            }
        }

        let url = self.url_for(path);
        let mut builder = self
            .http
            .request(method.clone(), &url)
            .headers(self.auth_headers().await?);

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(encoded) => {
                builder.header(CONTENT_TYPE, "application/json").body(encoded)
            }
        };

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        debug!(method = %method, path, "dispatching request");
        let started = Instant::now();

        let send = builder.send();
        let response = match &options.cancellation {
            Some(token) => {
                tokio::select! {
                    result = send => result?,
                    () = token.cancelled() => {
                        warn!(method = %method, path, "request cancelled in flight");
                        return Err(ApiError::cancelled(format!("{method} {path}")));
                    }
                }
            }
            None => send.await?,
        };

        self.finish(method, path, started, response).await
    }

    /// Shared response tail: status check, error-body capture, JSON decode
    async fn finish<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        started: Instant,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                method = %method,
                path,
                status = status.as_u16(),
                "request failed"
            );
            return Err(ApiError::http_response(status, body));
        }

        let value = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(format!("{method} {path}: {e}")))?;

        debug!(
            method = %method,
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );

        Ok(value)
    }
}
