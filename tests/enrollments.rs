//! Enrollment uniqueness and related listings.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use common::{create_id, get, post, put, test_app};

async fn seed_session(app: &axum::Router) -> String {
    let class_id = create_id(app, "/classes", json!({"name": "Yoga"})).await;
    let starts = (Utc::now() + Duration::days(1)).to_rfc3339();
    let ends = (Utc::now() + Duration::days(1) + Duration::hours(1)).to_rfc3339();
    create_id(
        app,
        "/class-sessions",
        json!({"class_id": class_id, "starts_at": starts, "ends_at": ends}),
    )
    .await
}

#[tokio::test]
async fn enrollment_requires_session_and_member() {
    let app = test_app().await;
    let (status, body) = post(&app, "/class-enrollments", json!({"status": "enrolled"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "session_id and member_id are required");
}

#[tokio::test]
async fn member_enrolls_at_most_once_per_session() {
    let app = test_app().await;
    let session_id = seed_session(&app).await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;

    let (status, body) = post(
        &app,
        "/class-enrollments",
        json!({"session_id": session_id, "member_id": member_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "enrolled");

    let (status, body) = post(
        &app,
        "/class-enrollments",
        json!({"session_id": session_id, "member_id": member_id}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Member already enrolled in this session");

    let (_, body) = get(&app, "/class-enrollments").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn same_member_may_enroll_in_different_sessions() {
    let app = test_app().await;
    let first = seed_session(&app).await;
    let second = seed_session(&app).await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;

    let (status, _) = post(
        &app,
        "/class-enrollments",
        json!({"session_id": first, "member_id": member_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post(
        &app,
        "/class-enrollments",
        json!({"session_id": second, "member_id": member_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn enrollment_listings_populate_relations() {
    let app = test_app().await;
    let session_id = seed_session(&app).await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;
    let enrollment_id = create_id(
        &app,
        "/class-enrollments",
        json!({"session_id": session_id, "member_id": member_id}),
    )
    .await;

    let (_, body) = get(&app, &format!("/class-enrollments/{}", enrollment_id)).await;
    assert_eq!(body["data"]["member"]["full_name"], "Jane Doe");
    assert!(body["data"]["session"]["starts_at"].is_string());

    let (_, body) = get(&app, &format!("/class-enrollments/session/{}", session_id)).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["member"]["full_name"], "Jane Doe");

    let (_, body) = get(&app, &format!("/class-enrollments/member/{}", member_id)).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["session"]["starts_at"].is_string());
}

#[tokio::test]
async fn enrollment_status_update_is_validated() {
    let app = test_app().await;
    let session_id = seed_session(&app).await;
    let member_id = create_id(&app, "/members", json!({"full_name": "Jane Doe"})).await;
    let enrollment_id = create_id(
        &app,
        "/class-enrollments",
        json!({"session_id": session_id, "member_id": member_id}),
    )
    .await;

    let (status, body) = put(
        &app,
        &format!("/class-enrollments/{}", enrollment_id),
        json!({"status": "teleported"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("status"));

    let (status, body) = put(
        &app,
        &format!("/class-enrollments/{}", enrollment_id),
        json!({"status": "attended"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "attended");
}
