// ABOUTME: Integration tests for login, registration, logout, and the session round trip
// ABOUTME: Asserts the OAuth2 password-grant wire shape and token store side effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use common::MockBackend;
use halcyon_client::errors::ApiError;
use halcyon_client::models::user::{Gender, RegisterRequest};

fn auth_router() -> Router {
    let user_id = Uuid::new_v4();
    Router::new()
        .route(
            "/v1/auth/login",
            post(|| async { Json(json!({"token": "abc"})) }),
        )
        .route(
            "/v1/auth/me",
            get(move || async move {
                Json(json!({
                    "id": user_id,
                    "email": "u@x.com",
                    "display_name": "U",
                }))
            }),
        )
        .route(
            "/v1/auth/register",
            post(|| async {
                (
                    StatusCode::CREATED,
                    Json(json!({"token": "fresh", "message": "Welcome to Halcyon"})),
                )
            }),
        )
        .route(
            "/v1/auth/email-exists",
            get(|| async { Json(json!({"exists": true})) }),
        )
}

#[tokio::test]
async fn login_sends_the_password_grant_form() {
    let backend = MockBackend::start(auth_router()).await;
    let client = backend.client();

    client.auth().login("u@x.com", "pw").await.unwrap();

    let request = backend.recorded().into_iter().next().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v1/auth/login");
    assert_eq!(
        request.header("content-type").as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(request.body_string(), "username=u%40x.com&password=pw");

    let decoded: Vec<(String, String)> = serde_urlencoded::from_bytes(&request.body).unwrap();
    assert_eq!(
        decoded,
        [
            ("username".to_owned(), "u@x.com".to_owned()),
            ("password".to_owned(), "pw".to_owned()),
        ]
    );
}

#[tokio::test]
async fn login_stores_the_token_and_later_calls_carry_it() {
    let backend = MockBackend::start(auth_router()).await;
    let client = backend.client();

    let response = client.auth().login("u@x.com", "pw").await.unwrap();
    assert_eq!(response.token, "abc");
    assert_eq!(
        client.credentials().load().await.unwrap().as_deref(),
        Some("abc")
    );

    let profile = client.auth().current_user().await.unwrap();
    assert_eq!(profile.email, "u@x.com");

    let me_request = backend.last_request();
    assert_eq!(me_request.path, "/v1/auth/me");
    assert_eq!(me_request.header("authorization").as_deref(), Some("Bearer abc"));
}

#[tokio::test]
async fn login_accepts_the_access_token_field_name() {
    let router = Router::new().route(
        "/v1/auth/login",
        post(|| async { Json(json!({"access_token": "alias", "token_type": "bearer"})) }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client();

    let response = client.auth().login("u@x.com", "pw").await.unwrap();
    assert_eq!(response.token, "alias");
}

#[tokio::test]
async fn failed_login_leaves_the_store_empty() {
    let router = Router::new().route(
        "/v1/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Invalid credentials"})),
            )
        }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client();

    let err = client.auth().login("u@x.com", "wrong").await.unwrap_err();
    match &err {
        ApiError::Http { status, message, .. } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    assert!(err.is_auth_error());
    assert!(client.credentials().load().await.unwrap().is_none());
}

#[tokio::test]
async fn register_sends_json_and_stores_the_returned_token() {
    let backend = MockBackend::start(auth_router()).await;
    let client = backend.client();

    let request = RegisterRequest::new("new@x.com", "longenough").with_gender(Gender::Female);
    let response = client.auth().register(&request).await.unwrap();

    assert_eq!(response.token.as_deref(), Some("fresh"));
    assert_eq!(
        client.credentials().load().await.unwrap().as_deref(),
        Some("fresh")
    );

    let recorded = backend.last_request();
    assert_eq!(recorded.path, "/v1/auth/register");
    assert_eq!(
        recorded.header("content-type").as_deref(),
        Some("application/json")
    );
    assert_eq!(
        recorded.body_string(),
        r#"{"email":"new@x.com","password":"longenough","gender":"female"}"#
    );
}

#[tokio::test]
async fn invalid_registration_never_reaches_the_wire() {
    let backend = MockBackend::start(auth_router()).await;
    let client = backend.client();

    let bad_email = RegisterRequest::new("not-an-email", "longenough");
    let err = client.auth().register(&bad_email).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }), "got {err:?}");

    let short_password = RegisterRequest::new("ok@x.com", "short");
    let err = client.auth().register(&short_password).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }), "got {err:?}");

    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn logout_destroys_the_stored_token() {
    let backend = MockBackend::start(auth_router()).await;
    let client = backend.client_with_token("abc");

    client.auth().logout().await.unwrap();

    assert!(client.credentials().load().await.unwrap().is_none());

    let _: Result<Value, _> = client.get("/v1/auth/me").await;
    let request = backend.last_request();
    assert!(request.header("authorization").is_none());
}

#[tokio::test]
async fn email_exists_encodes_the_query_and_returns_the_flag() {
    let backend = MockBackend::start(auth_router()).await;
    let client = backend.client();

    let exists = client.auth().email_exists("u@x.com").await.unwrap();
    assert!(exists);

    let request = backend.last_request();
    assert_eq!(request.path, "/v1/auth/email-exists");
    assert_eq!(request.query.as_deref(), Some("email=u%40x.com"));
}
