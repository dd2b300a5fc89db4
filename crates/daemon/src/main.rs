//! Jobboard - Server Entry Point
//! Opens the SQLite database and serves the HTTP API until Ctrl+C.

mod settings;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::{LogFormat, Settings};
use jobboard_api_http::{HttpServer, HttpServerConfig};
use jobboard_core::application::CatalogService;
use jobboard_infra_sqlite::{
    create_pool, run_migrations, SqliteEmployerRepository, SqliteJobRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(format: &LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobboard=info"))
        .context("Failed to create env filter")?;

    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let settings = Settings::load().context("Invalid JOBBOARD_* configuration")?;

    // 2. Initialize logging
    init_logging(&settings.log_format)?;

    info!("Jobboard v{} starting...", VERSION);
    info!(db_path = %settings.db_path, "Initializing database...");

    // 3. Initialize database
    let pool = create_pool(&settings.db_path, settings.max_connections)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 4. Setup dependencies (DI wiring)
    let jobs = Arc::new(SqliteJobRepository::new(pool.clone()));
    let employers = Arc::new(SqliteEmployerRepository::new(pool.clone()));
    let catalog = Arc::new(CatalogService::new(jobs, employers));

    // 5. Start HTTP server
    let http_config = HttpServerConfig {
        host: settings.host.clone(),
        port: settings.port,
    };
    let handle = HttpServer::new(http_config, catalog)
        .start()
        .await
        .context("HTTP server start failed")?;

    info!(url = %handle.base_url(), "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    handle.stop().await.context("HTTP server stop failed")?;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}
