use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use rssagg_backend::infrastructure::config::{Config, LogFormat};
use rssagg_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use rssagg_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing PORT or DB_URL is fatal before anything else starts
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting rssagg backend on {}:{}", config.host, config.port);

    let pool = create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("failed to create database pool")?;
    tracing::info!("Database connection pool created");

    check_connection(&pool)
        .await
        .context("database connection check failed")?;
    tracing::info!("Database connection verified");

    run_migrations(&pool)
        .await
        .context("failed to apply database migrations")?;
    tracing::info!("Database migrations applied");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    start_http_server(pool, config).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rssagg_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
