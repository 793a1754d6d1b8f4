use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::TokenPairResponse;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;

pub async fn login<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<LoginRequest>,
) -> Result<(StatusCode, Json<TokenPairResponse>), ApiError> {
    let pair = state
        .auth_service
        .login(&body.identifier, &body.password)
        .await
        .map_err(|e| {
            if !matches!(e, AuthError::InvalidCredentials) {
                tracing::warn!(error = %e, "Login failed on an internal error");
            }
            // Every login failure answers the same way.
            ApiError::Unauthorized(AuthError::InvalidCredentials.to_string())
        })?;

    // 201 is kept for compatibility with existing clients.
    Ok((StatusCode::CREATED, Json(pair.into())))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    /// Email or username.
    #[serde(default)]
    identifier: String,
    #[serde(default)]
    password: String,
}
