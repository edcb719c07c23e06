// Login and signup endpoints backed by the CredentialProvider port.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::shared::infrastructure::auth_gate::{AuthError, AuthGate};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

fn auth_error_response(error: &AuthError) -> Response {
    let status = match error {
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::EmailInUse => StatusCode::CONFLICT,
        AuthError::WeakPassword(_) | AuthError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        AuthError::Backend(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

pub async fn session(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.controller.auth_gate().current_session())
}

pub async fn sign_up(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.credentials.sign_up(&body.email, &body.password).await {
        Ok(identity) => (StatusCode::CREATED, Json(identity)).into_response(),
        Err(error) => auth_error_response(&error),
    }
}

pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.credentials.sign_in(&body.email, &body.password).await {
        Ok(identity) => Json(identity).into_response(),
        Err(error) => auth_error_response(&error),
    }
}

#[cfg(test)]
mod session_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::infrastructure::auth_gate::AuthGate;
    use crate::shell::state::AppState;
    use crate::test_support::inbound::empty_state;

    use super::{session, sign_in, sign_up};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/auth/session", get(session))
            .route("/auth/sign-up", post(sign_up))
            .route("/auth/sign-in", post(sign_in))
            .with_state(state)
    }

    async fn post_json(state: &AppState, uri: &str, body: &str) -> StatusCode {
        app(state.clone())
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn it_should_sign_up_then_sign_in() {
        let state = empty_state();
        state.controller.auth_gate().sign_out().await.unwrap();
        let credentials = r#"{"email":"new@example.com","password":"secret1"}"#;

        assert_eq!(post_json(&state, "/auth/sign-up", credentials).await, StatusCode::CREATED);
        assert_eq!(post_json(&state, "/auth/sign-up", credentials).await, StatusCode::CONFLICT);
        assert_eq!(post_json(&state, "/auth/sign-in", credentials).await, StatusCode::OK);
        assert!(state.controller.auth_gate().current_session().is_authenticated());
    }

    #[tokio::test]
    async fn it_should_return_401_for_wrong_credentials() {
        let state = empty_state();
        let status = post_json(
            &state,
            "/auth/sign-in",
            r#"{"email":"nobody@example.com","password":"secret1"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_weak_password() {
        let status = post_json(
            &empty_state(),
            "/auth/sign-up",
            r#"{"email":"new@example.com","password":"123"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_report_the_current_session() {
        let response = app(empty_state())
            .oneshot(Request::get("/auth/session").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["identity"]["email"], "host@example.com");
        assert_eq!(json["is_loading"], false);
    }
}
