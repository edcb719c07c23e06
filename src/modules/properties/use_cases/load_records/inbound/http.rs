use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::modules::properties::use_cases::load_records::handler::LoadOutcome;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.load().await {
        Ok(LoadOutcome::Applied { count }) => {
            Json(json!({ "outcome": "applied", "count": count })).into_response()
        }
        Ok(LoadOutcome::Stale) => Json(json!({ "outcome": "stale" })).into_response(),
        Err(error) => error_response(&error),
    }
}
