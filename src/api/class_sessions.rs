//! Class session endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{
    ClassSession, CreateClassSessionRequest, SessionDetail, SessionWithTrainer,
    UpdateClassSessionRequest,
};
use crate::db::repos::ClassSessionRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::{non_empty, validate_datetime};

fn validate_create(req: &CreateClassSessionRequest) -> Result<(), ApiError> {
    let class_id = non_empty(&req.class_id);
    let starts_at = non_empty(&req.starts_at);
    let ends_at = non_empty(&req.ends_at);
    if class_id.is_none() || starts_at.is_none() || ends_at.is_none() {
        return Err(ApiError::validation(
            "class_id, starts_at, and ends_at are required",
        ));
    }
    if let Some(value) = starts_at {
        validate_datetime(value, "starts_at").map_err(ApiError::validation)?;
    }
    if let Some(value) = ends_at {
        validate_datetime(value, "ends_at").map_err(ApiError::validation)?;
    }
    Ok(())
}

fn validate_update(req: &UpdateClassSessionRequest) -> Result<(), ApiError> {
    if let Some(value) = non_empty(&req.starts_at) {
        validate_datetime(value, "starts_at").map_err(ApiError::validation)?;
    }
    if let Some(value) = non_empty(&req.ends_at) {
        validate_datetime(value, "ends_at").map_err(ApiError::validation)?;
    }
    Ok(())
}

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateClassSessionRequest>,
) -> Result<ApiResponse<ClassSession>, ApiError> {
    validate_create(&req)?;

    let session = ClassSessionRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created(
        "Class session created successfully",
        session,
    ))
}

pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<SessionDetail>>, ApiError> {
    let sessions = ClassSessionRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Class sessions retrieved", sessions))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<SessionDetail>, ApiError> {
    let session = ClassSessionRepo::new(state.db.clone())
        .get_detail(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Class session not found"))?;
    Ok(ApiResponse::ok("Class session found", session))
}

pub async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClassSessionRequest>,
) -> Result<ApiResponse<ClassSession>, ApiError> {
    validate_update(&req)?;

    let session = ClassSessionRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Class session not found"))?;
    Ok(ApiResponse::ok("Class session updated successfully", session))
}

pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = ClassSessionRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Class session not found"));
    }
    Ok(ApiResponse::message("Class session deleted successfully"))
}

pub async fn list_by_class(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<String>,
) -> Result<ApiResponse<Vec<SessionWithTrainer>>, ApiError> {
    let sessions = ClassSessionRepo::new(state.db.clone())
        .list_by_class(&class_id)
        .await?;
    Ok(ApiResponse::ok("Class sessions found", sessions))
}

pub async fn list_upcoming(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<SessionDetail>>, ApiError> {
    let sessions = ClassSessionRepo::new(state.db.clone()).list_upcoming().await?;
    Ok(ApiResponse::ok("Upcoming class sessions retrieved", sessions))
}
