//! Class enrollment endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::models::{
    ClassEnrollment, CreateClassEnrollmentRequest, EnrollmentDetail, EnrollmentWithMember,
    EnrollmentWithSession, UpdateClassEnrollmentRequest,
};
use crate::db::repos::ClassEnrollmentRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::{non_empty, validate_one_of, ENROLLMENT_STATUSES};

pub async fn create_enrollment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateClassEnrollmentRequest>,
) -> Result<ApiResponse<ClassEnrollment>, ApiError> {
    let (Some(session_id), Some(member_id)) =
        (non_empty(&req.session_id), non_empty(&req.member_id))
    else {
        return Err(ApiError::validation("session_id and member_id are required"));
    };
    if let Some(status) = non_empty(&req.status) {
        validate_one_of(status, "status", &ENROLLMENT_STATUSES).map_err(ApiError::validation)?;
    }

    let repo = ClassEnrollmentRepo::new(state.db.clone());

    // Friendly message for the common case; a racing insert still trips the
    // unique index and surfaces as a conflict.
    if repo.find_pair(session_id, member_id).await?.is_some() {
        return Err(ApiError::validation(
            "Member already enrolled in this session",
        ));
    }

    let enrollment = repo.create(req).await?;
    Ok(ApiResponse::created(
        "Enrollment created successfully",
        enrollment,
    ))
}

pub async fn list_enrollments(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<EnrollmentDetail>>, ApiError> {
    let enrollments = ClassEnrollmentRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Enrollments retrieved", enrollments))
}

pub async fn get_enrollment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<EnrollmentDetail>, ApiError> {
    let enrollment = ClassEnrollmentRepo::new(state.db.clone())
        .get_detail(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Enrollment not found"))?;
    Ok(ApiResponse::ok("Enrollment found", enrollment))
}

pub async fn update_enrollment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClassEnrollmentRequest>,
) -> Result<ApiResponse<ClassEnrollment>, ApiError> {
    if let Some(status) = non_empty(&req.status) {
        validate_one_of(status, "status", &ENROLLMENT_STATUSES).map_err(ApiError::validation)?;
    }

    let enrollment = ClassEnrollmentRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Enrollment not found"))?;
    Ok(ApiResponse::ok("Enrollment updated successfully", enrollment))
}

pub async fn delete_enrollment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = ClassEnrollmentRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Enrollment not found"));
    }
    Ok(ApiResponse::message("Enrollment deleted successfully"))
}

pub async fn list_by_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<ApiResponse<Vec<EnrollmentWithMember>>, ApiError> {
    let enrollments = ClassEnrollmentRepo::new(state.db.clone())
        .list_by_session(&session_id)
        .await?;
    Ok(ApiResponse::ok("Enrollments found", enrollments))
}

pub async fn list_by_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<ApiResponse<Vec<EnrollmentWithSession>>, ApiError> {
    let enrollments = ClassEnrollmentRepo::new(state.db.clone())
        .list_by_member(&member_id)
        .await?;
    Ok(ApiResponse::ok("Enrollments found", enrollments))
}
