use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.sign_out().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(&error),
    }
}

#[cfg(test)]
mod sign_out_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use tower::ServiceExt;

    use crate::shared::infrastructure::auth_gate::AuthGate;
    use crate::shell::state::AppState;
    use crate::test_support::inbound::loaded_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/auth/sign-out", post(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_204_and_clear_the_dashboard() {
        let state = loaded_state().await;
        let response = app(state.clone())
            .oneshot(Request::post("/auth/sign-out").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(state.controller.records().await.is_empty());
        assert!(!state.controller.auth_gate().current_session().is_authenticated());
    }
}
