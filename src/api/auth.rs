//! Authentication endpoints: register, login, password management, profile.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::db::models::common::now_rfc3339;
use crate::db::models::{
    ChangePasswordRequest, CreateUserRequest, LoginRequest, LoginResponse, ProfileResponse,
    RegisterRequest, RegisterResponse, ResetPasswordRequest,
};
use crate::db::repos::UserRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::non_empty;

/// Work factor for password hashes.
const BCRYPT_COST: u32 = 10;

/// Hash a password with a per-hash random salt.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, BCRYPT_COST)
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

fn hash_or_internal(password: &str) -> Result<String, ApiError> {
    hash_password(password).map_err(|e| {
        tracing::error!("Password hashing failed: {}", e);
        ApiError::internal("Failed to process password")
    })
}

/// Constant-time check of the `X-Admin-Token` header against the configured
/// admin token. Gates trusted-context operations like password reset.
fn require_admin_token(config: &Config, headers: &HeaderMap) -> Result<(), ApiError> {
    let provided = headers
        .get("x-admin-token")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    let expected = config.auth.admin_token.as_bytes();

    if expected.len() == provided.len() && bool::from(expected.ct_eq(provided.as_bytes())) {
        Ok(())
    } else {
        Err(ApiError::unauthorized("Invalid admin token"))
    }
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<ApiResponse<RegisterResponse>, ApiError> {
    let (Some(username), Some(password)) = (non_empty(&req.username), non_empty(&req.password))
    else {
        return Err(ApiError::validation("username and password are required"));
    };
    let username = username.trim().to_lowercase();

    let repo = UserRepo::new(state.db.clone());
    if repo.find_by_username(&username).await?.is_some() {
        return Err(ApiError::validation("Username already exists"));
    }

    let password_hash = hash_or_internal(password)?;

    // Role is always "staff" here; elevation goes through the /users surface
    let user = repo
        .create(CreateUserRequest {
            username: Some(username),
            password_hash: Some(password_hash),
            role: Some("staff".to_string()),
            linked_trainer: None,
            linked_member: None,
        })
        .await?;

    Ok(ApiResponse::created(
        "User registered successfully",
        RegisterResponse {
            id: user.id,
            username: user.username,
            role: user.role,
        },
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, ApiError> {
    let (Some(username), Some(password)) = (non_empty(&req.username), non_empty(&req.password))
    else {
        return Err(ApiError::validation("username and password are required"));
    };

    let repo = UserRepo::new(state.db.clone());

    // Unknown user and wrong password are indistinguishable to the caller
    let user = repo
        .find_by_username(&username.trim().to_lowercase())
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    if !verify_password(password, &user.password_hash) {
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    let last_login_at = now_rfc3339();
    repo.touch_last_login(&user.id, &last_login_at).await?;

    Ok(ApiResponse::ok(
        "Login successful",
        LoginResponse {
            id: user.id,
            username: user.username,
            role: user.role,
            last_login_at: Some(last_login_at),
        },
    ))
}

pub async fn change_password(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<ApiResponse<()>, ApiError> {
    let (Some(user_id), Some(old_password), Some(new_password)) = (
        non_empty(&req.user_id),
        non_empty(&req.old_password),
        non_empty(&req.new_password),
    ) else {
        return Err(ApiError::validation(
            "user_id, old_password, and new_password are required",
        ));
    };

    let repo = UserRepo::new(state.db.clone());
    let user = repo
        .get(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !verify_password(old_password, &user.password_hash) {
        return Err(ApiError::unauthorized("Old password is incorrect"));
    }

    let password_hash = hash_or_internal(new_password)?;
    repo.set_password(&user.id, &password_hash).await?;

    Ok(ApiResponse::message("Password changed successfully"))
}

pub async fn reset_password(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<ApiResponse<()>, ApiError> {
    require_admin_token(&state.config, &headers)?;

    let (Some(username), Some(new_password)) =
        (non_empty(&req.username), non_empty(&req.new_password))
    else {
        return Err(ApiError::validation("username and new_password are required"));
    };

    let repo = UserRepo::new(state.db.clone());
    let user = repo
        .find_by_username(&username.trim().to_lowercase())
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let password_hash = hash_or_internal(new_password)?;
    repo.set_password(&user.id, &password_hash).await?;

    Ok(ApiResponse::message("Password reset successfully"))
}

pub async fn profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<ProfileResponse>, ApiError> {
    let user = UserRepo::new(state.db.clone())
        .get(&user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(ApiResponse::ok("Profile retrieved", ProfileResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("hunter2!").unwrap();
        assert!(verify_password("hunter2!", &hash));
        assert!(!verify_password("hunter3!", &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("hunter2!", "not-a-bcrypt-hash"));
    }
}
