//! Invoice API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Invoice router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/invoices", get(handler::list).post(handler::create))
        .route(
            "/api/invoices/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
