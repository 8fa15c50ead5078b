use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::admin::handlers::ActionResponse;
use crate::admin::AppState;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if !state.auth_required {
        return Ok(next.run(request).await);
    }

    if let Some(token) = bearer_token(request.headers()) {
        if state.sessions.validate(token).is_some() {
            return Ok(next.run(request).await);
        }
    }

    Err(StatusCode::UNAUTHORIZED)
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    match state
        .verifier
        .verify(&request.username, &request.password)
        .await
    {
        Ok(true) => {
            let token = state.sessions.issue(&request.username);
            tracing::info!(username = %request.username, "Administrator logged in");
            (
                StatusCode::OK,
                Json(LoginResponse {
                    success: true,
                    message: "Authenticated.".to_string(),
                    token: Some(token),
                }),
            )
        }
        Ok(false) => {
            tracing::warn!(username = %request.username, "Login rejected");
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse {
                    success: false,
                    message: "Invalid credentials.".to_string(),
                    token: None,
                }),
            )
        }
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(LoginResponse {
                success: false,
                message: format!("Credential check failed: {e}"),
                token: None,
            }),
        ),
    }
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<ActionResponse> {
    let revoked = bearer_token(&headers)
        .map(|token| state.sessions.revoke(token))
        .unwrap_or(false);

    Json(ActionResponse::plain(
        revoked,
        if revoked {
            "Session closed."
        } else {
            "No active session."
        },
    ))
}
