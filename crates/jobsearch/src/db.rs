use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use tracing::info;

use crate::config::Config;

/// Connect the shared pool. The `Any` driver resolves postgres:// and
/// sqlite: URLs to the matching backend.
pub async fn make_pool(cfg: &Config) -> anyhow::Result<AnyPool> {
    install_default_drivers();

    info!(
        max_connections = cfg.max_connections,
        acquire_timeout_secs = cfg.acquire_timeout.as_secs(),
        "connecting to job repository database"
    );

    let pool = AnyPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(cfg.acquire_timeout)
        .connect(&cfg.database_url)
        .await?;

    Ok(pool)
}
