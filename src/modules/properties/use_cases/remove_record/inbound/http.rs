use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn request(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    state.controller.request_remove(id).await;
    StatusCode::ACCEPTED
}

pub async fn cancel(State(state): State<AppState>) -> impl IntoResponse {
    state.controller.cancel_remove().await;
    StatusCode::NO_CONTENT
}

pub async fn confirm(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.confirm_remove().await {
        Ok(removed) => Json(json!({ "removed": removed })).into_response(),
        Err(error) => error_response(&error),
    }
}
