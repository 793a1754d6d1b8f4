use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserStore;
use crate::user::errors::AuthError;

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, clause: &str, value: &str) -> Result<Option<User>, AuthError> {
        let query = format!(
            "SELECT id, email, username, password_hash, role, created_at FROM users WHERE {}",
            clause
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::Database(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    username: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, AuthError> {
        // A row that fails domain parsing is corrupt data, not bad input.
        let email = EmailAddress::new(self.email)
            .map_err(|e| AuthError::Database(format!("corrupt email column: {}", e)))?;
        let role = self
            .role
            .parse::<Role>()
            .map_err(|e| AuthError::Database(format!("corrupt role column: {}", e)))?;

        Ok(User {
            id: UserId(self.id),
            email,
            username: self.username,
            password_hash: self.password_hash,
            role,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, username, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("users_email_key") {
                        return AuthError::EmailTaken;
                    }
                    if db_err.constraint() == Some("users_username_key") {
                        return AuthError::UsernameTaken;
                    }
                }
            }
            AuthError::Database(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, username, password_hash, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        self.fetch_where("email = $1", email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
        self.fetch_where("username = $1", username).await
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, AuthError> {
        self.fetch_where("email = $1 OR username = $1", identifier)
            .await
    }
}
