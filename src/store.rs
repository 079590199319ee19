//! Database bootstrap: create the database if missing and open the connection pool.

use crate::config::{is_valid_identifier, DatabaseConfig};
use crate::error::{AppError, ConfigError};
use crate::sql::quote_ident;
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};

/// Ensure the configured database exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before `connect_pool`.
pub async fn ensure_database_exists(config: &DatabaseConfig) -> Result<(), AppError> {
    let db_name = config.name.as_str();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    if !is_valid_identifier(db_name) {
        return Err(ConfigError::Invalid {
            key: "DB_NAME",
            reason: format!("{:?} is not a valid database identifier", db_name),
        }
        .into());
    }
    let mut conn = config.connect_options_for("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Open the shared pool. Each operation borrows one connection and returns it on drop.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        max_connections = config.max_connections,
        "opening PostgreSQL pool"
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await?;
    Ok(pool)
}
