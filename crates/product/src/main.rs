use anyhow::{Context, Result};
use product::{config::myconfig::Config, handler::AppRouter, state::AppState};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::{Telemetry, init_logger},
};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

const SERVICE_NAME: &str = "product-service";

#[tokio::main]
async fn main() -> Result<()> {
    let (config, state, telemetry, _log_guard) =
        setup().await.context("Failed to setup application")?;

    let server_result = AppRouter::serve(config.port, state).await;

    shutdown(telemetry).await;

    server_result
}

async fn setup() -> Result<(Config, AppState, Telemetry, Option<WorkerGuard>)> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = Telemetry::new(SERVICE_NAME, config.otel_endpoint.clone());
    let logger_provider = telemetry
        .init_logger()
        .context("Failed to initialize log exporter")?;
    telemetry
        .init_meter()
        .context("Failed to initialize metric exporter")?;
    telemetry
        .init_tracer()
        .context("Failed to initialize span exporter")?;

    let log_guard = init_logger(&logger_provider, SERVICE_NAME, is_dev, is_enable_file);

    info!("🚀 Starting Product Service initialization...");

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    ConnectionManager::check_connection(&db_pool).await?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    } else {
        info!("⏭️ Skipping migrations (RUN_MIGRATIONS=false)");
    }

    let state = AppState::new(db_pool);

    info!("✅ Application setup completed successfully.");
    Ok((config, state, telemetry, log_guard))
}

async fn shutdown(telemetry: Telemetry) {
    info!("🛑 Shutting down Product Service...");

    if let Err(e) = telemetry.shutdown().await {
        error!("Failed to shutdown telemetry: {}", e);
    }

    info!("✅ Product Service shutdown complete.");
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Applying database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("✅ Database migrations applied");
    Ok(())
}
