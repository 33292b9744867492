//! Connection pool wiring.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;
use crate::read_model::StoreError;
use crate::read_model::postgres::map_sqlx_error;

/// Open the Postgres pool described by `cfg`.
pub async fn connect_pool(cfg: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(cfg.acquire_timeout)
        .connect(&cfg.url)
        .await
        .map_err(|e| map_sqlx_error("connect", e))?;

    tracing::info!(max_connections = cfg.max_connections, "connected to postgres");
    Ok(pool)
}
