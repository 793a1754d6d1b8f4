use auth::PasswordError;
use auth::PolicyViolation;
use auth::TokenError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Top-level error for all authentication operations.
///
/// The `#[error]` strings double as the user-facing messages the HTTP
/// layer returns, so they must not carry internal detail.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Conflicts (registration uniqueness, pre-check or lost insert race)
    #[error("Email is already in use")]
    EmailTaken,

    #[error("Username is already in use")]
    UsernameTaken,

    // Validation
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password does not meet the policy")]
    PasswordPolicy(Vec<PolicyViolation>),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("{0}")]
    InvalidRole(#[from] RoleError),

    // Credentials: absent user and failed verification are one error so
    // callers cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Any refresh-token verification failure, whatever the cause.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    // Infrastructure
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    Database(String),
}
