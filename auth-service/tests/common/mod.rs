use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenIssuer;
use auth_service::domain::user::models::User;
use auth_service::domain::user::models::UserId;
use auth_service::domain::user::ports::UserStore;
use auth_service::domain::user::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::user::errors::AuthError;
use chrono::Duration;

pub const ACCESS_SECRET: &[u8] = b"test-access-secret-at-least-32-bytes!";
pub const REFRESH_SECRET: &[u8] = b"test-refresh-secret-at-least-32-byte!";

/// In-memory stand-in for the Postgres store, with the same uniqueness
/// behavior the database constraints provide. Keeps the API suite free of
/// external services.
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.lock().expect("store lock poisoned");

        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(AuthError::UsernameTaken);
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().expect("store lock poisoned");
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().expect("store lock poisoned");
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().expect("store lock poisoned");
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().expect("store lock poisoned");
        Ok(users
            .iter()
            .find(|u| u.email.as_str() == identifier || u.username == identifier)
            .cloned())
    }
}

/// Test application that spawns the real router on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub tokens: Arc<TokenIssuer>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().expect("No local addr").port();
        let address = format!("http://127.0.0.1:{}", port);

        let tokens = Arc::new(TokenIssuer::new(
            ACCESS_SECRET,
            REFRESH_SECRET,
            Duration::minutes(15),
            Duration::days(7),
        ));
        let user_store = Arc::new(InMemoryUserStore::new());
        let auth_service = Arc::new(AuthService::new(user_store, Arc::clone(&tokens)));

        let router = create_router(auth_service, "assets/images");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            tokens,
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
