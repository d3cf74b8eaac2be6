use cook_service::application::{
    deadline::Deadline,
    ports::{security::CredentialHasher, time::Clock},
    services::ApplicationServices,
};
use cook_service::config::{AppConfig, StorageBackend};
use cook_service::domain::storage::CookStorage;
use cook_service::infrastructure::{
    database,
    repositories::{InMemoryCookStore, PostgresCookStore, RedisCookStore},
    security::Argon2CredentialHasher,
    time::SystemClock,
};
use cook_service::presentation::http::{routes::build_router, state::HttpState};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let storage = open_storage(&config).await?;
    tracing::info!(backend = storage.backend_name(), "storage ready");

    let hasher: Arc<dyn CredentialHasher> =
        Arc::new(Argon2CredentialHasher::new(config.marker_context()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        storage,
        hasher,
        clock,
        Deadline::new(config.request_deadline()),
    ));

    let app = build_router(HttpState::new(services), config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn open_storage(config: &AppConfig) -> Result<Arc<dyn CookStorage>> {
    match config.storage_backend() {
        StorageBackend::Postgres => {
            let url = config.database_url().context("DATABASE_URL is not set")?;
            let pool = database::init_pool(url, config.database_max_connections()).await?;
            database::run_migrations(&pool).await?;
            Ok(Arc::new(PostgresCookStore::new(pool)))
        }
        StorageBackend::Redis => {
            let url = config.redis_url().context("REDIS_URL is not set")?;
            Ok(Arc::new(RedisCookStore::from_url(url)?))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on shutdown");
            Ok(Arc::new(InMemoryCookStore::new()))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
