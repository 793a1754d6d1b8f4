use std::sync::Arc;

use auth::TokenIssuer;
use auth_service::config::Config;
use auth_service::domain::user::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::PostgresUserStore;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        images_dir = %config.assets.images_dir,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database ready");

    let tokens = Arc::new(TokenIssuer::new(
        config.jwt.access_secret.as_bytes(),
        config.jwt.refresh_secret.as_bytes(),
        Duration::minutes(config.jwt.access_ttl_minutes),
        Duration::days(config.jwt.refresh_ttl_days),
    ));
    let user_store = Arc::new(PostgresUserStore::new(pg_pool));
    let auth_service = Arc::new(AuthService::new(user_store, tokens));

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Http server listening");

    let application = create_router(auth_service, &config.assets.images_dir);
    axum::serve(listener, application).await?;

    Ok(())
}
