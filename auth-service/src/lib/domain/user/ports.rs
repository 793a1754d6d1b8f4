use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;

/// Persistence port for user records.
///
/// Lookups and inserts are single atomic statements; the service performs
/// no cross-call serialization of its own.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness is ultimately the store's to enforce: a unique-constraint
    /// rejection (a registration race lost after the service's pre-checks)
    /// must surface as `EmailTaken` / `UsernameTaken`, not as a generic
    /// database failure.
    ///
    /// # Errors
    /// * `EmailTaken` - Email column uniqueness violated
    /// * `UsernameTaken` - Username column uniqueness violated
    /// * `Database` - Store operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Retrieve a user by exact email.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Retrieve a user by exact username.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError>;

    /// Retrieve a user whose email OR username matches the login
    /// identifier, in one lookup.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, AuthError>;
}
