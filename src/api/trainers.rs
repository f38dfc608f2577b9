//! Trainer endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{CreateTrainerRequest, Trainer, TrainerWithImage, UpdateTrainerRequest};
use crate::db::repos::TrainerRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::non_empty;

pub async fn create_trainer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTrainerRequest>,
) -> Result<ApiResponse<Trainer>, ApiError> {
    if non_empty(&req.full_name).is_none() {
        return Err(ApiError::validation("full_name is required"));
    }

    let trainer = TrainerRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created("Trainer created successfully", trainer))
}

pub async fn list_trainers(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<TrainerWithImage>>, ApiError> {
    let trainers = TrainerRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Trainers retrieved", trainers))
}

pub async fn get_trainer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<TrainerWithImage>, ApiError> {
    let trainer = TrainerRepo::new(state.db.clone())
        .get_with_image(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Trainer not found"))?;
    Ok(ApiResponse::ok("Trainer found", trainer))
}

pub async fn update_trainer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTrainerRequest>,
) -> Result<ApiResponse<Trainer>, ApiError> {
    let trainer = TrainerRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Trainer not found"))?;
    Ok(ApiResponse::ok("Trainer updated successfully", trainer))
}

pub async fn delete_trainer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = TrainerRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Trainer not found"));
    }
    Ok(ApiResponse::message("Trainer deleted successfully"))
}

pub async fn search_by_specialty(
    State(state): State<Arc<AppState>>,
    Path(specialty): Path<String>,
) -> Result<ApiResponse<Vec<TrainerWithImage>>, ApiError> {
    let trainers = TrainerRepo::new(state.db.clone())
        .find_by_specialty(&specialty)
        .await?;
    Ok(ApiResponse::ok("Trainers found", trainers))
}
