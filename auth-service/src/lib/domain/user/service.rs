use std::sync::Arc;

use auth::password::policy;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Utc;

use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::TokenPair;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserStore;
use crate::user::errors::AuthError;

/// Authentication domain service.
///
/// Orchestrates registration, login, and token refresh over an injected
/// store handle; all token state lives in the tokens themselves.
pub struct AuthService<S: UserStore> {
    store: Arc<S>,
    tokens: Arc<TokenIssuer>,
    password_hasher: PasswordHasher,
}

impl<S: UserStore> AuthService<S> {
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `tokens` - Token issuer shared with the rest of the process
    pub fn new(store: Arc<S>, tokens: Arc<TokenIssuer>) -> Self {
        Self {
            store,
            tokens,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Register a new user and return its id.
    ///
    /// Checks run in order: email conflict, username conflict, password
    /// confirmation, password policy. The store's unique constraints have
    /// the final word on conflicts: a concurrent registration that slips
    /// past the pre-checks still comes back as `EmailTaken`/`UsernameTaken`
    /// from the insert.
    ///
    /// # Errors
    /// * `EmailTaken` / `UsernameTaken` - Uniqueness conflict
    /// * `PasswordMismatch` - Confirmation does not match
    /// * `PasswordPolicy` - One or more policy rules violated
    /// * `Password` / `Database` - Infrastructure failure
    pub async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        if self
            .store
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken);
        }

        if self
            .store
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken);
        }

        if command.password != command.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let violations = policy::violations(&command.password);
        if !violations.is_empty() {
            return Err(AuthError::PasswordPolicy(violations));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            username: command.username,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
        };

        let created = self.store.create(user).await?;

        tracing::info!(user_id = %created.id, "User registered");

        Ok(created.id)
    }

    /// Authenticate by email-or-username identifier and password.
    ///
    /// An unknown identifier and a failed password verification produce
    /// the same `InvalidCredentials` error, so the caller cannot probe
    /// which accounts exist.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such user, or the password is wrong
    /// * `Password` / `Token` / `Database` - Infrastructure failure
    pub async fn login(&self, identifier: &str, password: &str) -> Result<TokenPair, AuthError> {
        let user = self
            .store
            .find_by_identifier(identifier)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify(password, &user.password_hash)?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_pair(&user)
    }

    /// Exchange a refresh token for a fresh access/refresh pair.
    ///
    /// The refresh claim set carries only the user id; the user record is
    /// re-read to bind the new access token to the current role. Every
    /// verification failure collapses into `InvalidRefreshToken`.
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - Expired, malformed, bad signature, or no
    ///   user behind the decoded id
    /// * `Token` / `Database` - Infrastructure failure
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self
            .tokens
            .verify_refresh_token(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        let user_id =
            UserId::from_string(&claims.sub).map_err(|_| AuthError::InvalidRefreshToken)?;

        let user = self
            .store
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        self.issue_pair(&user)
    }

    fn issue_pair(&self, user: &User) -> Result<TokenPair, AuthError> {
        let user_id = user.id.to_string();
        let access_token = self
            .tokens
            .generate_access_token(&user_id, user.role.as_str())?;
        let refresh_token = self.tokens.generate_refresh_token(&user_id)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
