//! Auth flows: registration, login, password management, profile.

mod common;

use axum::http::StatusCode;
use chrono::DateTime;
use liftr::config::Config;
use serde_json::json;

use common::{get, post, send, test_app, test_app_with_config};

#[tokio::test]
async fn register_assigns_staff_role_and_rejects_duplicates() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/auth/register",
        json!({"username": "alice", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["role"], "staff");
    assert!(body["data"].get("password_hash").is_none());

    let (status, body) = post(
        &app,
        "/auth/register",
        json!({"username": "alice", "password": "pw2"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username already exists");
}

#[tokio::test]
async fn register_requires_username_and_password() {
    let app = test_app().await;

    let (status, body) = post(&app, "/auth/register", json!({"username": "alice"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "username and password are required");

    let (status, _) = post(&app, "/auth/register", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_is_case_insensitive_on_username() {
    let app = test_app().await;

    post(&app, "/auth/register", json!({"username": "Alice", "password": "pw"})).await;
    let (status, body) = post(
        &app,
        "/auth/register",
        json!({"username": "ALICE", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists");
}

#[tokio::test]
async fn login_does_not_reveal_which_credential_failed() {
    let app = test_app().await;
    post(&app, "/auth/register", json!({"username": "alice", "password": "pw"})).await;

    let (status, wrong_password) = post(
        &app,
        "/auth/login",
        json!({"username": "alice", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown_user) = post(
        &app,
        "/auth/login",
        json!({"username": "nobody", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_password["message"], "Invalid username or password");
    assert_eq!(wrong_password["message"], unknown_user["message"]);
}

#[tokio::test]
async fn login_updates_last_login_at() {
    let app = test_app().await;
    let (_, registered) = post(
        &app,
        "/auth/register",
        json!({"username": "alice", "password": "pw"}),
    )
    .await;
    let user_id = registered["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = post(
        &app,
        "/auth/login",
        json!({"username": "alice", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert!(body["data"]["last_login_at"].is_string());

    let (_, profile) = get(&app, &format!("/auth/profile/{}", user_id)).await;
    let created_at =
        DateTime::parse_from_rfc3339(profile["data"]["created_at"].as_str().unwrap()).unwrap();
    let last_login =
        DateTime::parse_from_rfc3339(profile["data"]["last_login_at"].as_str().unwrap()).unwrap();
    assert!(last_login >= created_at);
}

#[tokio::test]
async fn change_password_verifies_old_password() {
    let app = test_app().await;
    let (_, registered) = post(
        &app,
        "/auth/register",
        json!({"username": "alice", "password": "old-pw"}),
    )
    .await;
    let user_id = registered["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = post(
        &app,
        "/auth/change-password",
        json!({"user_id": user_id, "old_password": "wrong", "new_password": "new-pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Old password is incorrect");

    let (status, body) = post(
        &app,
        "/auth/change-password",
        json!({"user_id": user_id, "old_password": "old-pw", "new_password": "new-pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password changed successfully");

    let (status, _) = post(
        &app,
        "/auth/login",
        json!({"username": "alice", "password": "old-pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = post(
        &app,
        "/auth/login",
        json!({"username": "alice", "password": "new-pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn reset_password_requires_admin_token() {
    let mut config = Config::default();
    config.auth.admin_token = "test-admin-token".to_string();
    let app = test_app_with_config(config).await;

    post(&app, "/auth/register", json!({"username": "alice", "password": "pw"})).await;

    // No token: rejected, password unchanged
    let (status, body) = post(
        &app,
        "/auth/reset-password",
        json!({"username": "alice", "new_password": "stolen"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid admin token");

    let (status, _) = post(
        &app,
        "/auth/login",
        json!({"username": "alice", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Wrong token: rejected
    let (status, _) = send(
        &app,
        "POST",
        "/auth/reset-password",
        Some(json!({"username": "alice", "new_password": "stolen"})),
        &[("x-admin-token", "guess")],
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Correct token: reset applies
    let (status, body) = send(
        &app,
        "POST",
        "/auth/reset-password",
        Some(json!({"username": "alice", "new_password": "fresh-pw"})),
        &[("x-admin-token", "test-admin-token")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password reset successfully");

    let (status, _) = post(
        &app,
        "/auth/login",
        json!({"username": "alice", "password": "fresh-pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn reset_password_unknown_user_is_not_found() {
    let mut config = Config::default();
    config.auth.admin_token = "test-admin-token".to_string();
    let app = test_app_with_config(config).await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/reset-password",
        Some(json!({"username": "ghost", "new_password": "pw"})),
        &[("x-admin-token", "test-admin-token")],
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn user_listing_never_exposes_password_hash() {
    let app = test_app().await;
    post(&app, "/auth/register", json!({"username": "alice", "password": "pw"})).await;

    let (status, body) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].get("password_hash").is_none());
    assert_eq!(users[0]["username"], "alice");
}

#[tokio::test]
async fn profile_returns_account_summary() {
    let app = test_app().await;
    let (_, registered) = post(
        &app,
        "/auth/register",
        json!({"username": "alice", "password": "pw"}),
    )
    .await;
    let user_id = registered["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = get(&app, &format!("/auth/profile/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Profile retrieved");
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["role"], "staff");
    assert!(body["data"].get("password_hash").is_none());

    let (status, body) = get(&app, "/auth/profile/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn user_admin_surface_enforces_unique_username() {
    let app = test_app().await;

    let (status, _) = post(
        &app,
        "/users",
        json!({"username": "bob", "password_hash": "$2b$10$hash"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(
        &app,
        "/users",
        json!({"username": "bob", "password_hash": "$2b$10$other"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("UNIQUE constraint failed"));
}

#[tokio::test]
async fn user_search_matches_exact_username() {
    let app = test_app().await;
    post(&app, "/auth/register", json!({"username": "alice", "password": "pw"})).await;

    let (status, body) = get(&app, "/users/search/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "alice");

    let (status, _) = get(&app, "/users/search/ali").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
