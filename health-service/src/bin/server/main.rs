use std::sync::Arc;

use auth::Authenticator;
use axum::Router;
use health_service::config::Config;
use health_service::domain::entry::service::EntryService;
use health_service::domain::user::service::AuthService;
use health_service::inbound::http::router::create_router;
use health_service::outbound::repositories::InMemoryEntryRepository;
use health_service::outbound::repositories::InMemoryUserRepository;
use health_service::outbound::repositories::PostgresEntryRepository;
use health_service::outbound::repositories::PostgresUserRepository;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "health_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "health-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        in_memory = config.is_in_memory(),
        token_ttl_seconds = config.jwt.ttl_seconds,
        "Configuration loaded"
    );

    let authenticator = Arc::new(config.build_authenticator()?);

    let http_application = if config.is_in_memory() {
        tracing::warn!("Using in-memory storage, data is lost on exit");
        in_memory_application(authenticator)
    } else {
        postgres_application(&config, authenticator).await?
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}

fn in_memory_application(authenticator: Arc<Authenticator>) -> Router {
    let auth_service = Arc::new(AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::clone(&authenticator),
    ));
    let entry_service = Arc::new(EntryService::new(Arc::new(InMemoryEntryRepository::new())));

    create_router(auth_service, entry_service, authenticator)
}

async fn postgres_application(
    config: &Config,
    authenticator: Arc<Authenticator>,
) -> Result<Router, anyhow::Error> {
    let pg_pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(config.database.url.expose_secret())
        .await?;
    tracing::info!(
        max_connections = MAX_CONNECTIONS,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let auth_service = Arc::new(AuthService::new(
        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
        Arc::clone(&authenticator),
    ));
    let entry_service = Arc::new(EntryService::new(Arc::new(PostgresEntryRepository::new(
        pg_pool,
    ))));

    Ok(create_router(auth_service, entry_service, authenticator))
}
