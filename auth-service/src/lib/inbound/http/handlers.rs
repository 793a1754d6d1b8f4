use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::TokenPair;
use crate::user::errors::AuthError;

pub mod login;
pub mod refresh;
pub mod register;

/// Message payload of an error response: a single string, or the full
/// rule list for password-policy failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: ErrorMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(ErrorMessage),
    Unauthorized(String),
    Forbidden(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(ErrorMessage::Single(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorMessage::Single(msg))
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorMessage::Single(msg)),
            ApiError::InternalServerError(msg) => {
                // The cause stays in the logs; the body is opaque.
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorMessage::Single("Internal server error".to_string()),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // Conflicts and validation failures both answer 400.
            AuthError::EmailTaken
            | AuthError::UsernameTaken
            | AuthError::PasswordMismatch
            | AuthError::InvalidEmail(_)
            | AuthError::InvalidRole(_) => ApiError::bad_request(err.to_string()),
            AuthError::PasswordPolicy(ref violations) => ApiError::BadRequest(
                ErrorMessage::Multiple(violations.iter().map(ToString::to_string).collect()),
            ),
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::InvalidRefreshToken => ApiError::Forbidden(err.to_string()),
            AuthError::Password(_) | AuthError::Token(_) | AuthError::Database(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Response body shared by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}
