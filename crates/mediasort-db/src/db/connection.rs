//! Database connection setup

use std::time::Duration;

use mediasort_core::{AppError, DatabaseConfig};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use super::schema::verify_schema;

// Queries are strictly sequential; one connection serves the whole run.
const MAX_CONNECTIONS: u32 = 1;
const CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Connection options built from the discrete settings, so credentials never
/// need URL escaping.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
}

/// Open the pool and check the schema contract once for the run
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Connecting to database..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(CONNECTION_TIMEOUT_SECS))
        .connect_with(connect_options(config))
        .await?;

    verify_schema(&pool).await?;

    tracing::info!("Database connected successfully");
    Ok(pool)
}
