//! Class endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{Class, CreateClassRequest, UpdateClassRequest};
use crate::db::repos::ClassRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::non_empty;

pub async fn create_class(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateClassRequest>,
) -> Result<ApiResponse<Class>, ApiError> {
    if non_empty(&req.name).is_none() {
        return Err(ApiError::validation("name is required"));
    }

    let class = ClassRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created("Class created successfully", class))
}

pub async fn list_classes(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<Class>>, ApiError> {
    let classes = ClassRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Classes retrieved", classes))
}

pub async fn get_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Class>, ApiError> {
    let class = ClassRepo::new(state.db.clone())
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Class not found"))?;
    Ok(ApiResponse::ok("Class found", class))
}

pub async fn update_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClassRequest>,
) -> Result<ApiResponse<Class>, ApiError> {
    let class = ClassRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Class not found"))?;
    Ok(ApiResponse::ok("Class updated successfully", class))
}

pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = ClassRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Class not found"));
    }
    Ok(ApiResponse::message("Class deleted successfully"))
}

pub async fn search_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<ApiResponse<Vec<Class>>, ApiError> {
    let classes = ClassRepo::new(state.db.clone()).search_by_name(&name).await?;
    Ok(ApiResponse::ok("Classes found", classes))
}
