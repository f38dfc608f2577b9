//! Payment endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::models::common::normalize_date;
use crate::db::models::{
    CreatePaymentRequest, Payment, PaymentDetail, PaymentStats, PaymentWithSubscription,
    UpdatePaymentRequest,
};
use crate::db::repos::PaymentRepo;
use crate::AppState;

use super::error::ApiError;
use super::response::ApiResponse;
use super::validation::non_empty;

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<ApiResponse<Payment>, ApiError> {
    if non_empty(&req.member_id).is_none() || req.amount_cents.is_none() {
        return Err(ApiError::validation("member_id and amount_cents are required"));
    }

    let payment = PaymentRepo::new(state.db.clone()).create(req).await?;
    Ok(ApiResponse::created("Payment created successfully", payment))
}

pub async fn list_payments(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<PaymentDetail>>, ApiError> {
    let payments = PaymentRepo::new(state.db.clone()).list().await?;
    Ok(ApiResponse::ok("Payments retrieved", payments))
}

pub async fn get_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<PaymentDetail>, ApiError> {
    let payment = PaymentRepo::new(state.db.clone())
        .get_detail(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Payment not found"))?;
    Ok(ApiResponse::ok("Payment found", payment))
}

pub async fn update_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePaymentRequest>,
) -> Result<ApiResponse<Payment>, ApiError> {
    let payment = PaymentRepo::new(state.db.clone())
        .update(&id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Payment not found"))?;
    Ok(ApiResponse::ok("Payment updated successfully", payment))
}

pub async fn delete_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let deleted = PaymentRepo::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Payment not found"));
    }
    Ok(ApiResponse::message("Payment deleted successfully"))
}

pub async fn list_by_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<ApiResponse<Vec<PaymentWithSubscription>>, ApiError> {
    let payments = PaymentRepo::new(state.db.clone())
        .list_by_member(&member_id)
        .await?;
    Ok(ApiResponse::ok("Payments found", payments))
}

pub async fn revenue_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatsQuery>,
) -> Result<ApiResponse<PaymentStats>, ApiError> {
    let from = match query.from_date.as_deref().filter(|s| !s.is_empty()) {
        Some(value) => Some(
            normalize_date(value).ok_or_else(|| ApiError::validation("Invalid from_date format"))?,
        ),
        None => None,
    };
    let to = match query.to_date.as_deref().filter(|s| !s.is_empty()) {
        Some(value) => Some(
            normalize_date(value).ok_or_else(|| ApiError::validation("Invalid to_date format"))?,
        ),
        None => None,
    };

    let stats = PaymentRepo::new(state.db.clone()).stats(from, to).await?;
    Ok(ApiResponse::ok("Payment stats retrieved", stats))
}
