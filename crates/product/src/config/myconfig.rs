use anyhow::{Context, Result, anyhow};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_MIN_CONN: u32 = 1;
const DEFAULT_DB_MAX_CONN: u32 = 5;
const DEFAULT_OTEL_ENDPOINT: &str = "http://otel-collector:4317";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub otel_endpoint: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let run_migrations = match std::env::var("RUN_MIGRATIONS").ok() {
            Some(value) => parse_bool("RUN_MIGRATIONS", &value)?,
            None => false,
        };

        let port = parse_or("PORT", std::env::var("PORT").ok(), DEFAULT_PORT)?;
        let db_min_conn = parse_or(
            "DB_MIN_CONN",
            std::env::var("DB_MIN_CONN").ok(),
            DEFAULT_DB_MIN_CONN,
        )?;
        let db_max_conn = parse_or(
            "DB_MAX_CONN",
            std::env::var("DB_MAX_CONN").ok(),
            DEFAULT_DB_MAX_CONN,
        )?;

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({db_min_conn}) must not exceed DB_MAX_CONN ({db_max_conn})"
            ));
        }

        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_OTEL_ENDPOINT.to_string());

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_min_conn,
            db_max_conn,
            otel_endpoint,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{name} must be a valid {}", std::any::type_name::<T>())),
        None => Ok(default),
    }
}
