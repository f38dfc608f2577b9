//! Image metadata endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{CreateImageRequest, Image, ImageWithUploader, UpdateImageRequest};
use crate::db::repos::ImageRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::non_empty;

pub async fn create_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateImageRequest>,
) -> Result<ApiResponse<Image>, ApiError> {
    if non_empty(&req.filename).is_none() || non_empty(&req.file_path).is_none() {
        return Err(ApiError::validation("filename and file_path are required"));
    }

    let image = ImageRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created("Image uploaded successfully", image))
}

pub async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<ImageWithUploader>>, ApiError> {
    let images = ImageRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Images retrieved", images))
}

pub async fn get_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ImageWithUploader>, ApiError> {
    let image = ImageRepo::new(state.db.clone())
        .get_with_uploader(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Image not found"))?;
    Ok(ApiResponse::ok("Image found", image))
}

pub async fn update_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateImageRequest>,
) -> Result<ApiResponse<Image>, ApiError> {
    let image = ImageRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Image not found"))?;
    Ok(ApiResponse::ok("Image updated successfully", image))
}

pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = ImageRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Image not found"));
    }
    Ok(ApiResponse::message("Image deleted successfully"))
}

pub async fn list_by_uploader(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<Vec<Image>>, ApiError> {
    let images = ImageRepo::new(state.db.clone())
        .list_by_uploader(&user_id)
        .await?;
    Ok(ApiResponse::ok("Images found", images))
}
