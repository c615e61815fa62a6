pub mod session;

use anyhow::{Context, Result};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::str::FromStr;
use std::time::Duration;

pub use session::DbSession;

/// Database connection type
pub type Database = PgPool;

/// Build the connection pool. Connections are opened on first use, so this
/// succeeds even when the database is down.
pub fn create_pool(config: &crate::config::DatabaseConfig) -> Result<Database> {
    let mut options =
        PgConnectOptions::from_str(&config.url).context("DATABASE_URL is not a valid URL")?;
    if !config.echo {
        options = options.disable_statement_logging();
    }

    let max_connections = max_connections(config);
    tracing::info!(
        min_connections = config.pool_size,
        max_connections,
        echo = config.echo,
        "Initializing PostgreSQL pool"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.pool_size)
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_millis(config.acquire_timeout_ms))
        .test_before_acquire(true)
        .connect_lazy_with(options);

    Ok(pool)
}

/// Upper bound of the pool: the persistent connections plus the overflow,
/// never zero.
pub fn max_connections(config: &crate::config::DatabaseConfig) -> u32 {
    config
        .pool_size
        .saturating_add(config.max_overflow)
        .max(1)
}
