use anyhow::Context;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        connection_string: &str,
        min_connections: u32,
        max_connections: u32,
    ) -> anyhow::Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .min_connections(min_connections)
            .max_connections(max_connections)
            .connect(connection_string)
            .await
            .context("Failed to create database connection pool")?;

        info!(
            "🗄️ Database pool ready (min: {}, max: {})",
            min_connections, max_connections
        );

        Ok(pool)
    }

    /// Round-trips a trivial query so startup fails fast on a bad connection string.
    pub async fn check_connection(pool: &ConnectionPool) -> anyhow::Result<()> {
        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .context("Database connection test failed")?;

        info!("✅ Database connection test: SUCCESS");
        Ok(())
    }
}
