use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Role;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::RoleError;

pub async fn register<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let user_id = state
        .auth_service
        .register(body.try_into_command()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered".to_string(),
            user_id: user_id.to_string(),
        }),
    ))
}

/// HTTP request body for registration (raw JSON).
///
/// Every field is optional at the serde level so absence can be reported
/// as a 400 with the offending field names instead of a deserialization
/// rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    confirm_password: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("{0}")]
    Role(#[from] RoleError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        let email = present(self.email);
        let password = present(self.password);
        let confirm_password = present(self.confirm_password);
        let role = present(self.role);
        let username = present(self.username);

        match (email, password, confirm_password, role, username) {
            (Some(email), Some(password), Some(confirm_password), Some(role), Some(username)) => {
                let email = EmailAddress::new(email)?;
                let role = role.parse::<Role>()?;
                Ok(RegisterCommand {
                    email,
                    username,
                    password,
                    confirm_password,
                    role,
                })
            }
            (email, password, confirm_password, role, username) => {
                let missing = [
                    ("email", email.is_none()),
                    ("password", password.is_none()),
                    ("confirmPassword", confirm_password.is_none()),
                    ("role", role.is_none()),
                    ("username", username.is_none()),
                ]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| name)
                .collect();

                Err(ParseRegisterRequestError::MissingFields(missing))
            }
        }
    }
}

/// Absent keys and blank values both count as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}
