//! Check-in endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{Checkin, CheckinWithMember, CreateCheckinRequest, UpdateCheckinRequest};
use crate::db::repos::CheckinRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::{non_empty, validate_datetime};

pub async fn create_checkin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCheckinRequest>,
) -> Result<ApiResponse<Checkin>, ApiError> {
    if non_empty(&req.member_id).is_none() {
        return Err(ApiError::validation("member_id is required"));
    }
    if let Some(value) = non_empty(&req.checked_in_at) {
        validate_datetime(value, "checked_in_at").map_err(ApiError::validation)?;
    }

    let checkin = CheckinRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created("Checkin created successfully", checkin))
}

pub async fn list_checkins(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<CheckinWithMember>>, ApiError> {
    let checkins = CheckinRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Checkins retrieved", checkins))
}

pub async fn get_checkin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<CheckinWithMember>, ApiError> {
    let checkin = CheckinRepo::new(state.db.clone())
        .get_with_member(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Checkin not found"))?;
    Ok(ApiResponse::ok("Checkin found", checkin))
}

pub async fn update_checkin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCheckinRequest>,
) -> Result<ApiResponse<Checkin>, ApiError> {
    let checkin = CheckinRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Checkin not found"))?;
    Ok(ApiResponse::ok("Checkin updated successfully", checkin))
}

pub async fn delete_checkin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = CheckinRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Checkin not found"));
    }
    Ok(ApiResponse::message("Checkin deleted successfully"))
}

pub async fn list_by_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<ApiResponse<Vec<Checkin>>, ApiError> {
    let checkins = CheckinRepo::new(state.db.clone())
        .list_by_member(&member_id)
        .await?;
    Ok(ApiResponse::ok("Checkins found", checkins))
}

pub async fn today_stats(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<CheckinWithMember>>, ApiError> {
    let checkins = CheckinRepo::new(state.db.clone()).list_today().await?;
    let count = checkins.len();
    Ok(ApiResponse::ok("Today checkins retrieved", checkins).with_count(count))
}
