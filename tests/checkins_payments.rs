//! Check-ins (including the local-day stats window), payments, and images.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Local, NaiveTime, TimeZone, Utc};
use serde_json::json;

use common::{create_id, delete, get, post, test_app};

/// A local wall-clock time on today's date, as UTC RFC 3339.
fn local_today_at(hour: u32, minute: u32, day_offset: i64) -> String {
    let date = Local::now().date_naive() + Duration::days(day_offset);
    let naive = date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap());
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap()
        .with_timezone(&Utc)
        .to_rfc3339()
}

#[tokio::test]
async fn checkin_create_requires_member_id() {
    let app = test_app().await;
    let (status, body) = post(&app, "/checkins", json!({"note": "walk-in"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "member_id is required");
}

#[tokio::test]
async fn today_stats_use_local_day_boundary() {
    let app = test_app().await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;

    // 23:59 yesterday local and 00:01 today local
    let late_yesterday = local_today_at(23, 59, -1);
    let early_today = local_today_at(0, 1, 0);

    create_id(
        &app,
        "/checkins",
        json!({"member_id": member_id, "checked_in_at": late_yesterday, "note": "yesterday"}),
    )
    .await;
    create_id(
        &app,
        "/checkins",
        json!({"member_id": member_id, "checked_in_at": early_today, "note": "today"}),
    )
    .await;

    let (status, body) = get(&app, "/checkins/stats/today").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Today checkins retrieved");
    assert_eq!(body["count"], 1);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["note"], "today");
    assert_eq!(rows[0]["member"]["full_name"], "Jane Doe");
}

#[tokio::test]
async fn checkins_listed_by_member_most_recent_first() {
    let app = test_app().await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;

    let earlier = (Utc::now() - Duration::hours(2)).to_rfc3339();
    let later = (Utc::now() - Duration::hours(1)).to_rfc3339();
    create_id(
        &app,
        "/checkins",
        json!({"member_id": member_id, "checked_in_at": earlier, "note": "first"}),
    )
    .await;
    create_id(
        &app,
        "/checkins",
        json!({"member_id": member_id, "checked_in_at": later, "note": "second"}),
    )
    .await;

    let (_, body) = get(&app, &format!("/checkins/member/{}", member_id)).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["note"], "second");
    assert_eq!(rows[1]["note"], "first");
}

#[tokio::test]
async fn payment_create_requires_member_and_amount() {
    let app = test_app().await;
    let (status, body) = post(&app, "/payments", json!({"method": "cash"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "member_id and amount_cents are required");
}

#[tokio::test]
async fn payment_defaults_currency_and_paid_at() {
    let app = test_app().await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;

    let (status, body) = post(
        &app,
        "/payments",
        json!({"member_id": member_id, "amount_cents": 150_000}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["currency"], "VND");
    assert!(body["data"]["paid_at"].is_string());
}

#[tokio::test]
async fn revenue_stats_sum_count_and_average() {
    let app = test_app().await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;

    post(&app, "/payments", json!({"member_id": member_id, "amount_cents": 1000})).await;
    post(&app, "/payments", json!({"member_id": member_id, "amount_cents": 2000})).await;

    let (status, body) = get(&app, "/payments/stats/revenue").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Payment stats retrieved");
    assert_eq!(body["data"]["total_amount_cents"], 3000);
    assert_eq!(body["data"]["payment_count"], 2);
    assert_eq!(body["data"]["average_amount_cents"], 1500.0);
    assert_eq!(body["data"]["total_amount_vnd"], 30.0);

    // A window in the far future matches nothing
    let (status, body) = get(&app, "/payments/stats/revenue?from_date=2999-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_amount_cents"], 0);
    assert_eq!(body["data"]["payment_count"], 0);
    assert_eq!(body["data"]["average_amount_cents"], 0.0);

    let (status, body) = get(&app, "/payments/stats/revenue?from_date=garbage").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid from_date format");
}

#[tokio::test]
async fn payment_populate_survives_deleted_member() {
    let app = test_app().await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;
    let payment_id = create_id(
        &app,
        "/payments",
        json!({"member_id": member_id, "amount_cents": 1000}),
    )
    .await;

    let (_, body) = get(&app, &format!("/payments/{}", payment_id)).await;
    assert_eq!(body["data"]["member"]["full_name"], "Jane Doe");

    // Hard delete leaves the payment behind with a dangling reference
    delete(&app, &format!("/members/{}", member_id)).await;
    let (status, body) = get(&app, &format!("/payments/{}", payment_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["member"], serde_json::Value::Null);
    assert_eq!(body["data"]["amount_cents"], 1000);
}

#[tokio::test]
async fn image_create_requires_filename_and_path() {
    let app = test_app().await;
    let (status, body) = post(&app, "/images", json!({"mime_type": "image/png"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "filename and file_path are required");
}

#[tokio::test]
async fn image_uploader_populate_never_leaks_password_hash() {
    let app = test_app().await;
    let (_, user) = post(
        &app,
        "/users",
        json!({"username": "staffer", "password_hash": "$2b$10$secret"}),
    )
    .await;
    let user_id = user["data"]["id"].as_str().unwrap().to_string();

    let image_id = create_id(
        &app,
        "/images",
        json!({"filename": "gym.png", "file_path": "/uploads/gym.png", "uploaded_by": user_id}),
    )
    .await;

    let (status, body) = get(&app, &format!("/images/{}", image_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["uploader"]["username"], "staffer");
    assert!(body["data"]["uploader"].get("password_hash").is_none());

    let (_, body) = get(&app, &format!("/images/uploaded-by/{}", user_id)).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
