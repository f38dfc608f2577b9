//! User administration endpoints.
//!
//! This surface accepts a pre-computed password hash and an explicit role;
//! self-service registration lives under `/auth` and always assigns "staff".

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::db::repos::UserRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::{non_empty, validate_one_of, USER_ROLES};

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<ApiResponse<User>, ApiError> {
    if non_empty(&req.username).is_none() || non_empty(&req.password_hash).is_none() {
        return Err(ApiError::validation(
            "Username and password_hash are required",
        ));
    }
    if let Some(role) = non_empty(&req.role) {
        validate_one_of(role, "role", &USER_ROLES).map_err(ApiError::validation)?;
    }

    let user = UserRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created("User created successfully", user))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<User>>, ApiError> {
    let users = UserRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Users retrieved", users))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<User>, ApiError> {
    let user = UserRepo::new(state.db.clone())
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(ApiResponse::ok("User found", user))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiResponse<User>, ApiError> {
    if let Some(role) = non_empty(&req.role) {
        validate_one_of(role, "role", &USER_ROLES).map_err(ApiError::validation)?;
    }

    let user = UserRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(ApiResponse::ok("User updated successfully", user))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = UserRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("User not found"));
    }
    Ok(ApiResponse::message("User deleted successfully"))
}

pub async fn search_by_username(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<ApiResponse<User>, ApiError> {
    let user = UserRepo::new(state.db.clone())
        .find_by_username(&username.trim().to_lowercase())
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(ApiResponse::ok("User found", user))
}
