//! Client API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Client router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/clients", get(handler::list).post(handler::create))
        .route(
            "/api/clients/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/api/clients/{id}/invoices", get(handler::list_invoices))
}
