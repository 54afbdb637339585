//! Signal history endpoints.

use crate::error::AppError;
use crate::types::Signal;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SignalsQuery {
    pub limit: Option<usize>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/signals", get(get_signals))
        .route("/api/signals/:id", get(get_signal))
}

async fn get_signals(
    State(state): State<AppState>,
    Query(query): Query<SignalsQuery>,
) -> Json<Vec<Signal>> {
    let limit = query.limit.unwrap_or(20);
    Json(state.signal_store.recent(limit))
}

async fn get_signal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Signal>, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::NotFound("Signal not found".to_string()))?;

    state
        .signal_store
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Signal not found".to_string()))
}
