//! Client API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Client, ClientCreate, ClientUpdate, Invoice};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ValidJson, parse_id};

const RESOURCE: &str = "Client";

/// List all clients, newest first
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Client>> {
    Json(state.store.clients().find_all())
}

/// Get client by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Client>> {
    let id = parse_id(&id, RESOURCE)?;
    let client = state
        .store
        .clients()
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(RESOURCE))?;
    Ok(Json(client))
}

/// Create a new client
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<ClientCreate>,
) -> (StatusCode, Json<Client>) {
    let client = state.store.clients().create(payload);
    (StatusCode::CREATED, Json(client))
}

/// Update a client; omitted fields are kept
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ClientUpdate>,
) -> AppResult<Json<Client>> {
    let id = parse_id(&id, RESOURCE)?;
    let client = state
        .store
        .clients()
        .update(id, payload)
        .ok_or_else(|| AppError::not_found(RESOURCE))?;
    Ok(Json(client))
}

/// Delete a client
///
/// Invoices referencing it are left in place.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, RESOURCE)?;
    if !state.store.clients().delete(id) {
        return Err(AppError::not_found(RESOURCE));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Invoices of one client, newest first; empty for an unknown client
pub async fn list_invoices(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Invoice>>> {
    let id = parse_id(&id, RESOURCE)?;
    Ok(Json(state.store.invoices().find_by_client(id)))
}
