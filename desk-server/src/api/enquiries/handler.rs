//! Enquiry API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Enquiry, EnquiryCreate, EnquiryUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ValidJson, parse_id};

const RESOURCE: &str = "Enquiry";

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Enquiry>> {
    Json(state.store.enquiries().find_all())
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Enquiry>> {
    let id = parse_id(&id, RESOURCE)?;
    state
        .store
        .enquiries()
        .find_by_id(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(RESOURCE))
}

/// Create an enquiry; priority defaults to medium, status to open
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<EnquiryCreate>,
) -> (StatusCode, Json<Enquiry>) {
    let enquiry = state.store.enquiries().create(payload);
    (StatusCode::CREATED, Json(enquiry))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<EnquiryUpdate>,
) -> AppResult<Json<Enquiry>> {
    let id = parse_id(&id, RESOURCE)?;
    state
        .store
        .enquiries()
        .update(id, payload)
        .map(Json)
        .ok_or_else(|| AppError::not_found(RESOURCE))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, RESOURCE)?;
    if state.store.enquiries().delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(RESOURCE))
    }
}
