// ABOUTME: Integration tests for the typed endpoint groups against envelope and bare responses
// ABOUTME: Covers path construction, query encoding, client-side validation, envelope unwrapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::time::Duration;

use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

use common::MockBackend;
use halcyon_client::client::RequestOptions;
use halcyon_client::errors::ApiError;
use halcyon_client::models::chat::ChatSendRequest;
use halcyon_client::models::diet::{MealLogRequest, MealType};
use halcyon_client::models::labs::{LabMarker, LabReportUpload};
use halcyon_client::models::plans::{GeneratePlanRequest, PlanAdjustmentRequest};
use halcyon_client::models::weight::WeightLogRequest;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn weight_log_and_history_use_the_logs_collection() {
    let entry_id = Uuid::new_v4();
    let router = Router::new()
        .route(
            "/v1/weight/logs",
            post(move || async move {
                Json(json!({
                    "id": entry_id,
                    "weight_kg": 81.4,
                    "logged_on": "2026-08-20",
                }))
            })
            .get(move || async move {
                Json(json!([{
                    "id": entry_id,
                    "weight_kg": 81.4,
                    "logged_on": "2026-08-20",
                    "note": "morning",
                }]))
            }),
        );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let entry = client
        .weight()
        .log(&WeightLogRequest::new(81.4).on(date("2026-08-20")))
        .await
        .unwrap();
    assert_eq!(entry.id, entry_id);
    assert_eq!(
        backend.last_request().body_string(),
        r#"{"weight_kg":81.4,"logged_on":"2026-08-20"}"#
    );

    let history = client.weight().history(Some(30)).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].note.as_deref(), Some("morning"));

    let request = backend.last_request();
    assert_eq!(request.path, "/v1/weight/logs");
    assert_eq!(request.query.as_deref(), Some("limit=30"));
}

#[tokio::test]
async fn weight_delete_targets_the_entry_and_parses_the_ack() {
    let entry_id = Uuid::new_v4();
    let router = Router::new().route(
        "/v1/weight/logs/:id",
        delete(|| async { Json(json!({"deleted": true})) }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let ack = client.weight().delete(entry_id).await.unwrap();
    assert!(ack.deleted);
    assert_eq!(
        backend.last_request().path,
        format!("/v1/weight/logs/{entry_id}")
    );
}

#[tokio::test]
async fn invalid_weight_is_rejected_before_dispatch() {
    let backend = MockBackend::start(Router::new()).await;
    let client = backend.client_with_token("t");

    for kg in [0.0, -3.0, 1200.0, f64::NAN] {
        let err = client
            .weight()
            .log(&WeightLogRequest::new(kg))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput { .. }), "kg={kg}: {err:?}");
    }
    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn meals_on_filters_by_date() {
    let meal_id = Uuid::new_v4();
    let router = Router::new().route(
        "/v1/diet/meals",
        get(move || async move {
            Json(json!([{
                "id": meal_id,
                "meal_type": "lunch",
                "description": "chicken salad",
                "eaten_on": "2026-08-20",
                "calories": 520.0,
            }]))
        }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let meals = client.diet().meals_on(date("2026-08-20")).await.unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].meal_type, MealType::Lunch);

    assert_eq!(
        backend.last_request().query.as_deref(),
        Some("date=2026-08-20")
    );
}

#[tokio::test]
async fn food_search_encodes_the_query_and_respects_bounds() {
    let router = Router::new().route(
        "/v1/diet/foods/search",
        get(|| async {
            Json(json!({
                "foods": [{
                    "id": Uuid::new_v4(),
                    "name": "Greek yogurt",
                    "calories_per_100g": 59.0,
                }],
                "total": 1,
            }))
        }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let results = client.diet().search_foods("greek yogurt", 5).await.unwrap();
    assert_eq!(results.total, 1);
    assert_eq!(results.foods[0].name, "Greek yogurt");

    assert_eq!(
        backend.last_request().query.as_deref(),
        Some("query=greek+yogurt&limit=5")
    );

    let err = client.diet().search_foods("  ", 5).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }), "got {err:?}");

    let err = client.diet().search_foods("x", 0).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }), "got {err:?}");

    let err = client.diet().search_foods("x", 1000).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }), "got {err:?}");
}

#[tokio::test]
async fn empty_meal_description_is_rejected_before_dispatch() {
    let backend = MockBackend::start(Router::new()).await;
    let client = backend.client_with_token("t");

    let request = MealLogRequest::new(MealType::Dinner, "   ");
    let err = client.diet().log_meal(&request).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }), "got {err:?}");
    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn lab_upload_unwraps_the_envelope() {
    let report_id = Uuid::new_v4();
    let router = Router::new().route(
        "/v1/labs/reports",
        post(move || async move {
            Json(json!({
                "success": true,
                "message": "report stored",
                "data": {
                    "id": report_id,
                    "title": "Annual checkup",
                    "collected_on": "2026-08-01",
                    "markers": [{
                        "name": "LDL cholesterol",
                        "value": 162.0,
                        "unit": "mg/dL",
                        "reference_range": "< 130",
                        "flag": "high",
                    }],
                    "summary": "LDL is elevated.",
                },
            }))
        }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let upload = LabReportUpload {
        title: "Annual checkup".to_owned(),
        collected_on: date("2026-08-01"),
        markers: vec![LabMarker {
            name: "LDL cholesterol".to_owned(),
            value: 162.0,
            unit: "mg/dL".to_owned(),
            reference_range: None,
            flag: None,
        }],
    };
    let report = client.labs().upload(&upload).await.unwrap();

    assert_eq!(report.id, report_id);
    assert_eq!(report.summary.as_deref(), Some("LDL is elevated."));

    let empty = LabReportUpload {
        title: "No markers".to_owned(),
        collected_on: date("2026-08-01"),
        markers: vec![],
    };
    let err = client.labs().upload(&empty).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }), "got {err:?}");
}

#[tokio::test]
async fn monthly_plan_is_enveloped_and_month_is_validated() {
    let plan_id = Uuid::new_v4();
    let router = Router::new().route(
        "/v1/plans/monthly",
        get(move || async move {
            Json(json!({
                "success": true,
                "data": {
                    "id": plan_id,
                    "year": 2026,
                    "month": 8,
                    "focus": "build an aerobic base",
                    "narrative": "This month is about consistency.",
                },
            }))
        }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let plan = client.plans().monthly(2026, 8).await.unwrap();
    assert_eq!(plan.focus, "build an aerobic base");
    assert_eq!(
        backend.last_request().query.as_deref(),
        Some("year=2026&month=8")
    );

    let err = client.plans().monthly(2026, 13).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }), "got {err:?}");
}

#[tokio::test]
async fn plan_generation_honors_a_per_call_deadline() {
    let router = Router::new().route(
        "/v1/plans/weekly/generate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"success": true}))
        }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let request = GeneratePlanRequest {
        week_start: date("2026-08-17"),
        focus: None,
    };
    let options = RequestOptions::new().with_timeout(Duration::from_millis(200));
    let err = client
        .plans()
        .generate_weekly_with(&request, options)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn completing_a_plan_item_hits_the_nested_path() {
    let plan_id = Uuid::new_v4();
    let item_id = Uuid::new_v4();
    let router = Router::new().route(
        "/v1/plans/weekly/:plan/items/:item/complete",
        post(move || async move {
            Json(json!({
                "success": true,
                "data": {
                    "id": item_id,
                    "title": "30 min zone 2 run",
                    "kind": "exercise",
                    "scheduled_on": "2026-08-19",
                    "completed": true,
                },
            }))
        }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let item = client.plans().complete_item(plan_id, item_id).await.unwrap();
    assert!(item.completed);
    assert_eq!(
        backend.last_request().path,
        format!("/v1/plans/weekly/{plan_id}/items/{item_id}/complete")
    );
}

#[tokio::test]
async fn empty_adjustment_instruction_is_rejected_before_dispatch() {
    let backend = MockBackend::start(Router::new()).await;
    let client = backend.client_with_token("t");

    let err = client
        .plans()
        .adjust_weekly(Uuid::new_v4(), &PlanAdjustmentRequest::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }), "got {err:?}");
    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn chat_reply_comes_out_of_the_envelope() {
    let conversation_id = Uuid::new_v4();
    let router = Router::new().route(
        "/v1/chat/messages",
        post(move || async move {
            Json(json!({
                "success": true,
                "data": {
                    "id": Uuid::new_v4(),
                    "conversation_id": conversation_id,
                    "role": "assistant",
                    "content": "Your week looked strong.",
                    "created_at": "2026-08-20T18:00:00Z",
                },
            }))
        }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let reply = client
        .chat()
        .send(&ChatSendRequest::new("How did my week go?"))
        .await
        .unwrap();

    assert_eq!(reply.conversation_id, conversation_id);
    assert_eq!(reply.content, "Your week looked strong.");
}

#[tokio::test]
async fn envelope_failure_surfaces_as_an_application_error() {
    let router = Router::new().route(
        "/v1/chat/messages",
        post(|| async {
            Json(json!({
                "success": false,
                "message": "assistant unavailable",
            }))
        }),
    );
    let backend = MockBackend::start(router).await;
    let client = backend.client_with_token("t");

    let err = client
        .chat()
        .send(&ChatSendRequest::new("hello"))
        .await
        .unwrap_err();

    match err {
        ApiError::Application { message } => assert_eq!(message, "assistant unavailable"),
        other => panic!("expected Application error, got {other:?}"),
    }
}
