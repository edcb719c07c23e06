use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;

use crate::modules::properties::core::record::PropertyStatus;
use crate::modules::properties::core::validate::RecordInput;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

/// Form body shared by create and update. The price may arrive as a JSON number or as
/// the raw text of the form field; validation happens in the core either way.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBody {
    pub name: String,
    #[serde(default)]
    pub price_per_night: Value,
    #[serde(default)]
    pub status: Option<PropertyStatus>,
}

impl From<PropertyBody> for RecordInput {
    fn from(body: PropertyBody) -> Self {
        let price_per_night = match body.price_per_night {
            Value::String(text) => text,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        };
        RecordInput {
            name: body.name,
            price_per_night,
            status: body.status,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PropertyBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.controller.create(body.into()).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => error_response(&error),
    }
}
