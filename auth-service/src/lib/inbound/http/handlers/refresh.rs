use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::TokenPairResponse;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;

pub async fn refresh_access_token<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<RefreshRequest>,
) -> Result<(StatusCode, Json<TokenPairResponse>), ApiError> {
    let refresh_token = body
        .refresh_token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Refresh token is required"))?;

    let pair = state
        .auth_service
        .refresh(&refresh_token)
        .await
        .map_err(|e| {
            if !matches!(e, AuthError::InvalidRefreshToken) {
                tracing::warn!(error = %e, "Refresh failed on an internal error");
            }
            // One generic answer for every verification failure.
            ApiError::Forbidden(AuthError::InvalidRefreshToken.to_string())
        })?;

    Ok((StatusCode::OK, Json(pair.into())))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(default)]
    refresh_token: Option<String>,
}
