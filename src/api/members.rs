//! Member endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{CreateMemberRequest, Member, UpdateMemberRequest};
use crate::db::repos::MemberRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::{non_empty, validate_datetime, validate_one_of, GENDERS, MEMBER_STATUSES};

fn validate_create(req: &CreateMemberRequest) -> Result<(), ApiError> {
    if non_empty(&req.full_name).is_none() {
        return Err(ApiError::validation("full_name is required"));
    }
    if let Some(gender) = non_empty(&req.gender) {
        validate_one_of(gender, "gender", &GENDERS).map_err(ApiError::validation)?;
    }
    if let Some(status) = non_empty(&req.status) {
        validate_one_of(status, "status", &MEMBER_STATUSES).map_err(ApiError::validation)?;
    }
    if let Some(dob) = non_empty(&req.date_of_birth) {
        validate_datetime(dob, "date_of_birth").map_err(ApiError::validation)?;
    }
    Ok(())
}

fn validate_update(req: &UpdateMemberRequest) -> Result<(), ApiError> {
    if let Some(Some(gender)) = req.gender.as_ref() {
        validate_one_of(gender, "gender", &GENDERS).map_err(ApiError::validation)?;
    }
    if let Some(status) = non_empty(&req.status) {
        validate_one_of(status, "status", &MEMBER_STATUSES).map_err(ApiError::validation)?;
    }
    if let Some(dob) = non_empty(&req.date_of_birth) {
        validate_datetime(dob, "date_of_birth").map_err(ApiError::validation)?;
    }
    Ok(())
}

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<ApiResponse<Member>, ApiError> {
    validate_create(&req)?;

    let member = MemberRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created("Member created successfully", member))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<Member>>, ApiError> {
    let members = MemberRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Members retrieved", members))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Member>, ApiError> {
    let member = MemberRepo::new(state.db.clone())
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Member not found"))?;
    Ok(ApiResponse::ok("Member found", member))
}

pub async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMemberRequest>,
) -> Result<ApiResponse<Member>, ApiError> {
    validate_update(&req)?;

    let member = MemberRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Member not found"))?;
    Ok(ApiResponse::ok("Member updated successfully", member))
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = MemberRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Member not found"));
    }
    Ok(ApiResponse::message("Member deleted successfully"))
}

pub async fn search_by_email(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<ApiResponse<Member>, ApiError> {
    let member = MemberRepo::new(state.db.clone())
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::not_found("Member not found"))?;
    Ok(ApiResponse::ok("Member found", member))
}
