//! Dashboard statistics

use axum::{Json, Router, extract::State, routing::get};
use shared::models::Stats;

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/stats", get(stats))
}

async fn stats(State(state): State<ServerState>) -> AppResult<Json<Stats>> {
    Ok(Json(state.store.stats()?))
}
