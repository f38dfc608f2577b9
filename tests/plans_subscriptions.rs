//! Membership plans and subscriptions.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_id, get, post, put, test_app};

#[tokio::test]
async fn plan_create_requires_name_and_price() {
    let app = test_app().await;

    let (status, body) = post(&app, "/membership-plans", json!({"name": "Monthly"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name and price_cents are required");

    let (status, _) = post(&app, "/membership-plans", json!({"price_cents": 100})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn active_plans_sorted_by_price_ascending() {
    let app = test_app().await;
    create_id(
        &app,
        "/membership-plans",
        json!({"name": "Gold", "price_cents": 900_000}),
    )
    .await;
    create_id(
        &app,
        "/membership-plans",
        json!({"name": "Basic", "price_cents": 300_000}),
    )
    .await;
    create_id(
        &app,
        "/membership-plans",
        json!({"name": "Legacy", "price_cents": 100, "is_active": false}),
    )
    .await;

    let (status, body) = get(&app, "/membership-plans/active/list").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Active membership plans retrieved");
    let plans = body["data"].as_array().unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0]["name"], "Basic");
    assert_eq!(plans[1]["name"], "Gold");
}

#[tokio::test]
async fn plan_update_applies_false_and_zero() {
    let app = test_app().await;
    let id = create_id(
        &app,
        "/membership-plans",
        json!({"name": "Monthly", "price_cents": 500_000, "session_count": 12}),
    )
    .await;

    let (status, body) = put(
        &app,
        &format!("/membership-plans/{}", id),
        json!({"is_active": false, "session_count": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_active"], false);
    assert_eq!(body["data"]["session_count"], 0);
    assert_eq!(body["data"]["price_cents"], 500_000);
}

#[tokio::test]
async fn subscription_create_requires_member_plan_and_start() {
    let app = test_app().await;

    let (status, body) = post(&app, "/subscriptions", json!({"status": "active"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "member_id, plan_id, and start_date are required");
}

#[tokio::test]
async fn subscription_defaults_and_populates() {
    let app = test_app().await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;
    let plan_id = create_id(
        &app,
        "/membership-plans",
        json!({"name": "Monthly", "price_cents": 500_000}),
    )
    .await;

    let (status, body) = post(
        &app,
        "/subscriptions",
        json!({"member_id": member_id, "plan_id": plan_id, "start_date": "2026-08-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "active");
    let subscription_id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = get(&app, &format!("/subscriptions/{}", subscription_id)).await;
    assert_eq!(body["data"]["member"]["full_name"], "Jane Doe");
    assert_eq!(body["data"]["plan"]["name"], "Monthly");

    let (_, body) = get(&app, &format!("/subscriptions/member/{}", member_id)).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["plan"]["name"], "Monthly");
}

#[tokio::test]
async fn subscription_update_clears_end_date_with_null() {
    let app = test_app().await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;
    let plan_id = create_id(
        &app,
        "/membership-plans",
        json!({"name": "Monthly", "price_cents": 500_000}),
    )
    .await;
    let id = create_id(
        &app,
        "/subscriptions",
        json!({
            "member_id": member_id,
            "plan_id": plan_id,
            "start_date": "2026-08-01",
            "end_date": "2026-09-01"
        }),
    )
    .await;

    let (status, body) = put(&app, &format!("/subscriptions/{}", id), json!({"end_date": null})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["end_date"], serde_json::Value::Null);

    let (status, body) = put(
        &app,
        &format!("/subscriptions/{}", id),
        json!({"status": "paused", "remaining_sessions": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "paused");
    assert_eq!(body["data"]["remaining_sessions"], 5);
}
