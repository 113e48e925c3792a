//! HTTP server initialization and runtime setup.
//!
//! Connects the relational store and the cache, applies migrations and runs
//! the Axum server until Ctrl-C or SIGTERM.

use crate::config::{CacheBackend, Config};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::PgUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// A store that is not configured is left out of [`AppState`]; the server
/// still starts and answers 500 "Store not configured" where it is needed.
///
/// # Errors
///
/// Returns an error if:
/// - A configured store cannot be reached
/// - Migrations fail
/// - Server bind fails
pub async fn run(config: Config) -> Result<()> {
    let repository: Option<Arc<dyn UrlRepository>> = match &config.database_url {
        Some(database_url) => {
            let pool = connect_database(&config, database_url).await?;
            Some(Arc::new(PgUrlRepository::new(Arc::new(pool))))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, relational store disabled");
            None
        }
    };

    let cache = connect_cache(&config).await?;

    let state = AppState::new(repository, cache, config.base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the pool with the configured limits and applies pending migrations.
pub async fn connect_database(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    Ok(pool)
}

/// Connects the configured cache backend.
pub async fn connect_cache(config: &Config) -> Result<Option<Arc<dyn CacheService>>> {
    match (config.cache_backend, &config.redis_url) {
        (CacheBackend::None, _) => {
            tracing::info!("Cache disabled (NullCache)");
            Ok(Some(Arc::new(NullCache::new())))
        }
        (CacheBackend::Redis, Some(redis_url)) => {
            let redis = RedisCache::connect(redis_url, config.cache_ttl_seconds)
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Cache enabled (Redis)");
            Ok(Some(Arc::new(redis)))
        }
        (CacheBackend::Redis, None) => {
            tracing::warn!("REDIS_URL not set, cache store disabled");
            Ok(None)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
