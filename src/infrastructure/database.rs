//! Connection pool setup.
//!
//! The pool is created once at startup, shared by every request through
//! [`crate::state::AppState`], and closed during graceful shutdown.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Opens a bounded PostgreSQL pool sized from the configuration.
///
/// # Errors
///
/// Returns an error if the initial connection cannot be established.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
        .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Applies the embedded migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    Ok(())
}
