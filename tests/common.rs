// ABOUTME: Shared test utilities: a recording mock backend served on an ephemeral port
// ABOUTME: Provides client constructors wired to the mock and request inspection helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test utilities for `halcyon_client`
//!
//! Every integration test talks to a real HTTP server: an axum router bound
//! to an ephemeral localhost port, wrapped in a middleware that records each
//! request (method, path, headers, raw body) before handling it. Tests
//! assert on the recorded wire traffic, not on client internals.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use halcyon_client::auth::{CredentialStore, MemoryTokenStore};
use halcyon_client::client::ApiClient;
use halcyon_client::config::ClientConfig;

/// One request as the backend saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Header value as a string, `None` when absent
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
    }

    /// Raw body decoded as UTF-8
    pub fn body_string(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

async fn record_request(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

    log.lock().unwrap().push(RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_owned(),
        query: parts.uri.query().map(ToOwned::to_owned),
        headers: parts.headers.clone(),
        body: bytes.to_vec(),
    });

    let request = Request::from_parts(parts, Body::from(bytes));
    next.run(request).await
}

/// Mock Halcyon backend for integration tests
///
/// Serves the given router on an ephemeral port and records every request.
/// The server task is aborted when the backend is dropped.
pub struct MockBackend {
    addr: SocketAddr,
    requests: RequestLog,
    task: JoinHandle<()>,
}

impl MockBackend {
    /// Serve `router` on an ephemeral localhost port
    pub async fn start(router: Router) -> Self {
        let requests: RequestLog = Arc::new(Mutex::new(Vec::new()));
        let recording = router.layer(middleware::from_fn_with_state(
            Arc::clone(&requests),
            record_request,
        ));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, recording).await.unwrap();
        });

        Self {
            addr,
            requests,
            task,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Config pointing at this backend, default timeouts
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url())
    }

    /// Client with an empty in-memory credential store
    pub fn client(&self) -> ApiClient {
        self.client_with_store(Arc::new(MemoryTokenStore::new()))
    }

    /// Client whose store already holds `token`
    pub fn client_with_token(&self, token: &str) -> ApiClient {
        self.client_with_store(Arc::new(MemoryTokenStore::with_token(token)))
    }

    /// Client over an explicit credential store
    pub fn client_with_store(&self, store: Arc<dyn CredentialStore>) -> ApiClient {
        ApiClient::new(self.config(), store).unwrap()
    }

    /// Client built from a custom config (for timeout tests)
    pub fn client_with_config(&self, config: ClientConfig) -> ApiClient {
        ApiClient::new(config, Arc::new(MemoryTokenStore::new())).unwrap()
    }

    /// Everything recorded so far, in arrival order
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request; panics when none arrived
    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request reached the mock backend")
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}
