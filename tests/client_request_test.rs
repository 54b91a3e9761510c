// ABOUTME: Integration tests for the authenticated HTTP core against a recording mock backend
// ABOUTME: Covers header injection, body shape, error normalization, timeout, and cancellation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use common::MockBackend;
use halcyon_client::auth::MemoryTokenStore;
use halcyon_client::client::{ApiClient, CancellationToken, RequestOptions};
use halcyon_client::config::ClientConfig;
use halcyon_client::errors::ApiError;

fn basic_router() -> Router {
    Router::new()
        .route("/v1/ping", get(|| async { Json(json!({"a": 1})) }))
        .route("/v1/echo", post(|| async { Json(json!({"ok": true})) }))
        .route(
            "/v1/resource",
            put(|| async { Json(json!({"ok": true})) })
                .patch(|| async { Json(json!({"ok": true})) })
                .delete(|| async { Json(json!({"deleted": true})) }),
        )
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "not found") }),
        )
        .route(
            "/detail-error",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "Weight must be positive"})),
                )
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"ok": true}))
            })
            .put(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"ok": true}))
            }),
        )
}

#[tokio::test]
async fn stored_token_becomes_bearer_header() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client_with_token("abc123");

    let _: Value = client.get("/v1/ping").await.unwrap();

    let request = backend.last_request();
    assert_eq!(request.header("authorization").as_deref(), Some("Bearer abc123"));
}

#[tokio::test]
async fn missing_token_sends_no_authorization_header() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let _: Value = client.get("/v1/ping").await.unwrap();

    let request = backend.last_request();
    assert!(request.header("authorization").is_none());
}

#[derive(Serialize)]
struct EchoBody {
    weight_kg: f64,
    note: String,
}

#[tokio::test]
async fn post_body_is_exact_json_with_content_type() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let body = EchoBody {
        weight_kg: 81.4,
        note: "morning".to_owned(),
    };
    let _: Value = client.post("/v1/echo", &body).await.unwrap();

    let request = backend.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.header("content-type").as_deref(),
        Some("application/json")
    );
    assert_eq!(
        request.body_string(),
        serde_json::to_string(&body).unwrap()
    );
    assert_eq!(request.body_string(), r#"{"weight_kg":81.4,"note":"morning"}"#);
}

#[tokio::test]
async fn put_patch_delete_reach_the_same_path() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let _: Value = client.put("/v1/resource", &json!({"v": 1})).await.unwrap();
    let _: Value = client.patch("/v1/resource", &json!({"v": 2})).await.unwrap();
    let _: Value = client.delete("/v1/resource").await.unwrap();

    let methods: Vec<String> = backend.recorded().iter().map(|r| r.method.clone()).collect();
    assert_eq!(methods, ["PUT", "PATCH", "DELETE"]);
}

#[tokio::test]
async fn success_body_resolves_to_typed_value() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let value: Value = client.get("/v1/ping").await.unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[tokio::test]
async fn non_2xx_carries_status_and_verbatim_body() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let err = client.get::<Value>("/missing").await.unwrap_err();
    match err {
        ApiError::Http {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "not found");
            assert_eq!(body, "not found");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn json_detail_field_becomes_the_message() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let err = client.get::<Value>("/detail-error").await.unwrap_err();
    match err {
        ApiError::Http {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Weight must be positive");
            assert!(body.contains("\"detail\""));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let router = Router::new().route("/v1/ping", get(|| async { "plain text, not json" }));
    let backend = MockBackend::start(router).await;
    let client = backend.client();

    let err = client.get::<Value>("/v1/ping").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn per_call_timeout_trips_before_the_response() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let options = RequestOptions::new().with_timeout(Duration::from_millis(200));
    let err = client.get_with::<Value>("/slow", options).await.unwrap_err();

    assert!(matches!(err, ApiError::Timeout { .. }), "got {err:?}");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn configured_timeout_applies_without_options() {
    let backend = MockBackend::start(basic_router()).await;
    let config = backend.config().with_timeout(Duration::from_millis(200));
    let client = backend.client_with_config(config);

    let err = client.get::<Value>("/slow").await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn cancelled_token_skips_dispatch_entirely() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let token = CancellationToken::new();
    token.cancel();

    let options = RequestOptions::new().with_cancellation(token);
    let err = client.get_with::<Value>("/v1/ping", options).await.unwrap_err();

    assert!(matches!(err, ApiError::Cancelled { .. }), "got {err:?}");
    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn cancelled_token_stops_a_delete_before_dispatch() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let token = CancellationToken::new();
    token.cancel();

    let options = RequestOptions::new().with_cancellation(token);
    let err = client
        .delete_with::<Value>("/v1/resource", options)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Cancelled { .. }), "got {err:?}");
    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn per_call_timeout_applies_to_put() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let options = RequestOptions::new().with_timeout(Duration::from_millis(200));
    let err = client
        .put_with::<Value, _>("/slow", &json!({"v": 1}), options)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn cancellation_interrupts_an_in_flight_request() {
    let backend = MockBackend::start(basic_router()).await;
    let client = backend.client();

    let token = CancellationToken::new();
    let options = RequestOptions::new().with_cancellation(token.clone());

    let (result, ()) = tokio::join!(client.get_with::<Value>("/slow", options), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::Cancelled { .. }), "got {err:?}");
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Bind a port to learn a free address, then release it so nothing listens.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(format!("http://{addr}"));
    let client = ApiClient::new(config, std::sync::Arc::new(MemoryTokenStore::new())).unwrap();

    let err = client.get::<Value>("/v1/ping").await.unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }), "got {err:?}");
}
