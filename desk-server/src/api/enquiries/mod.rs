//! Enquiry API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Enquiry router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/enquiries", get(handler::list).post(handler::create))
        .route(
            "/api/enquiries/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
