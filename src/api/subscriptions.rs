//! Subscription endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{
    CreateSubscriptionRequest, Subscription, SubscriptionDetail, SubscriptionWithPlan,
    UpdateSubscriptionRequest,
};
use crate::db::repos::SubscriptionRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::{non_empty, validate_datetime, validate_one_of, SUBSCRIPTION_STATUSES};

fn validate_create(req: &CreateSubscriptionRequest) -> Result<(), ApiError> {
    let member_id = non_empty(&req.member_id);
    let plan_id = non_empty(&req.plan_id);
    let start_date = non_empty(&req.start_date);
    if member_id.is_none() || plan_id.is_none() || start_date.is_none() {
        return Err(ApiError::validation(
            "member_id, plan_id, and start_date are required",
        ));
    }
    if let Some(value) = start_date {
        validate_datetime(value, "start_date").map_err(ApiError::validation)?;
    }
    if let Some(value) = non_empty(&req.end_date) {
        validate_datetime(value, "end_date").map_err(ApiError::validation)?;
    }
    if let Some(status) = non_empty(&req.status) {
        validate_one_of(status, "status", &SUBSCRIPTION_STATUSES).map_err(ApiError::validation)?;
    }
    Ok(())
}

fn validate_update(req: &UpdateSubscriptionRequest) -> Result<(), ApiError> {
    if let Some(Some(value)) = req.end_date.as_ref() {
        validate_datetime(value, "end_date").map_err(ApiError::validation)?;
    }
    if let Some(status) = non_empty(&req.status) {
        validate_one_of(status, "status", &SUBSCRIPTION_STATUSES).map_err(ApiError::validation)?;
    }
    Ok(())
}

pub async fn create_subscription(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSubscriptionRequest>,
) -> Result<ApiResponse<Subscription>, ApiError> {
    validate_create(&req)?;

    let subscription = SubscriptionRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created(
        "Subscription created successfully",
        subscription,
    ))
}

pub async fn list_subscriptions(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<SubscriptionDetail>>, ApiError> {
    let subscriptions = SubscriptionRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Subscriptions retrieved", subscriptions))
}

pub async fn get_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<SubscriptionDetail>, ApiError> {
    let subscription = SubscriptionRepo::new(state.db.clone())
        .get_detail(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Subscription not found"))?;
    Ok(ApiResponse::ok("Subscription found", subscription))
}

pub async fn update_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSubscriptionRequest>,
) -> Result<ApiResponse<Subscription>, ApiError> {
    validate_update(&req)?;

    let subscription = SubscriptionRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Subscription not found"))?;
    Ok(ApiResponse::ok(
        "Subscription updated successfully",
        subscription,
    ))
}

pub async fn delete_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = SubscriptionRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Subscription not found"));
    }
    Ok(ApiResponse::message("Subscription deleted successfully"))
}

pub async fn list_by_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<ApiResponse<Vec<SubscriptionWithPlan>>, ApiError> {
    let subscriptions = SubscriptionRepo::new(state.db.clone())
        .list_by_member(&member_id)
        .await?;
    Ok(ApiResponse::ok("Subscriptions found", subscriptions))
}
