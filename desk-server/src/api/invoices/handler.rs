//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ValidJson, parse_id};

const RESOURCE: &str = "Invoice";

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Invoice>> {
    Json(state.store.invoices().find_all())
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Invoice>> {
    let id = parse_id(&id, RESOURCE)?;
    let invoice = state
        .store
        .invoices()
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(RESOURCE))?;
    Ok(Json(invoice))
}

/// Create an invoice and assign its number
///
/// `clientId` is stored as given and totals are taken as sent.
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<InvoiceCreate>,
) -> (StatusCode, Json<Invoice>) {
    let invoice = state.store.invoices().create(payload);
    (StatusCode::CREATED, Json(invoice))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<InvoiceUpdate>,
) -> AppResult<Json<Invoice>> {
    let id = parse_id(&id, RESOURCE)?;
    let invoice = state
        .store
        .invoices()
        .update(id, payload)
        .ok_or_else(|| AppError::not_found(RESOURCE))?;
    Ok(Json(invoice))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, RESOURCE)?;
    if !state.store.invoices().delete(id) {
        return Err(AppError::not_found(RESOURCE));
    }
    Ok(StatusCode::NO_CONTENT)
}
