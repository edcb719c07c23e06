use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::modules::properties::controller::ControllerError;
use crate::modules::properties::core::ports::RecordStoreError;
use crate::modules::properties::use_cases::create_record::inbound::http as create_http;
use crate::modules::properties::use_cases::list_records::inbound::http as list_http;
use crate::modules::properties::use_cases::load_records::inbound::http as load_http;
use crate::modules::properties::use_cases::remove_record::inbound::http as remove_http;
use crate::modules::properties::use_cases::sign_out::inbound::http as sign_out_http;
use crate::modules::properties::use_cases::update_record::inbound::http as update_http;
use crate::modules::session::inbound::http as session_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/properties", get(list_http::handle).post(create_http::handle))
        .route("/properties/counts", get(list_http::counts))
        .route("/properties/reload", post(load_http::handle))
        .route("/properties/delete-confirm", post(remove_http::confirm))
        .route("/properties/delete-cancel", post(remove_http::cancel))
        .route("/properties/{id}", put(update_http::handle))
        .route("/properties/{id}/delete-request", post(remove_http::request))
        .route("/auth/session", get(session_http::session))
        .route("/auth/sign-up", post(session_http::sign_up))
        .route("/auth/sign-in", post(session_http::sign_in))
        .route("/auth/sign-out", post(sign_out_http::handle))
        .with_state(state)
}

/// Maps a controller error onto a status code and a `{"error": message}` body.
pub fn error_response(error: &ControllerError) -> Response {
    let status = match error {
        ControllerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ControllerError::Unauthenticated => StatusCode::UNAUTHORIZED,
        ControllerError::RemoteRead(RecordStoreError::NotFound(_))
        | ControllerError::RemoteWrite {
            source: RecordStoreError::NotFound(_),
            ..
        } => StatusCode::NOT_FOUND,
        ControllerError::RemoteRead(_)
        | ControllerError::RemoteWrite { .. }
        | ControllerError::Session(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
