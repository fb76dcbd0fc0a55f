use std::time::Duration;

use crate::jobs::query::validate_table_prefix;

pub const DEFAULT_TABLE_PREFIX: &str = "BATCH_";

// Config is loaded once from the environment (and .env when present)
// and handed to the pool + repository constructors.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub table_prefix: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL is missing"))?;

        let table_prefix = env_or_fallback("JOBSEARCH_TABLE_PREFIX", "TABLE_PREFIX")
            .unwrap_or_else(|| DEFAULT_TABLE_PREFIX.to_string());
        validate_table_prefix(&table_prefix)?;

        let max_connections = std::env::var("JOBSEARCH_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(4)
            .clamp(1, 32);

        let acquire_timeout_secs = std::env::var("JOBSEARCH_DB_ACQUIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(10)
            .clamp(1, 60);

        Ok(Self {
            database_url,
            table_prefix,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

fn env_or_fallback(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            std::env::var(fallback)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
}
