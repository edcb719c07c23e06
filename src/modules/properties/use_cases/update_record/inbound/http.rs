use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::properties::use_cases::create_record::inbound::http::PropertyBody;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PropertyBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.controller.update(&id, body.into()).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(&error),
    }
}

#[cfg(test)]
mod update_record_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use tower::ServiceExt;

    use crate::modules::properties::core::record::PropertyStatus;
    use crate::shell::state::AppState;
    use crate::test_support::inbound::loaded_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/properties/{id}", put(handle))
            .with_state(state)
    }

    async fn put_json(state: AppState, uri: &str, body: &str) -> StatusCode {
        app(state)
            .oneshot(
                Request::put(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn it_should_return_204_and_update_the_record() {
        let state = loaded_state().await;
        let status = put_json(
            state.clone(),
            "/properties/r2",
            r#"{"name":"Downtown Loft","pricePerNight":"110","status":"Booked"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let records = state.controller.records().await;
        assert_eq!(records[1].price_per_night, 110.0);
        assert_eq!(records[1].status, PropertyStatus::Booked);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_document() {
        let status = put_json(
            loaded_state().await,
            "/properties/ghost",
            r#"{"name":"Ghost","pricePerNight":1}"#,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_blank_name() {
        let status = put_json(
            loaded_state().await,
            "/properties/r1",
            r#"{"name":" ","pricePerNight":1}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
