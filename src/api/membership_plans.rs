//! Membership plan endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{CreateMembershipPlanRequest, MembershipPlan, UpdateMembershipPlanRequest};
use crate::db::repos::MembershipPlanRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::non_empty;

pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMembershipPlanRequest>,
) -> Result<ApiResponse<MembershipPlan>, ApiError> {
    if non_empty(&req.name).is_none() || req.price_cents.is_none() {
        return Err(ApiError::validation("name and price_cents are required"));
    }

    let plan = MembershipPlanRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created(
        "Membership plan created successfully",
        plan,
    ))
}

pub async fn list_plans(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<MembershipPlan>>, ApiError> {
    let plans = MembershipPlanRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Membership plans retrieved", plans))
}

pub async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<MembershipPlan>, ApiError> {
    let plan = MembershipPlanRepo::new(state.db.clone())
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Membership plan not found"))?;
    Ok(ApiResponse::ok("Membership plan found", plan))
}

pub async fn update_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMembershipPlanRequest>,
) -> Result<ApiResponse<MembershipPlan>, ApiError> {
    let plan = MembershipPlanRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Membership plan not found"))?;
    Ok(ApiResponse::ok("Membership plan updated successfully", plan))
}

pub async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = MembershipPlanRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Membership plan not found"));
    }
    Ok(ApiResponse::message("Membership plan deleted successfully"))
}

pub async fn list_active(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<MembershipPlan>>, ApiError> {
    let plans = MembershipPlanRepo::new(state.db.clone()).list_active().await?;
    Ok(ApiResponse::ok("Active membership plans retrieved", plans))
}
