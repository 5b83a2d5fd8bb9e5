//! Database connection and error conversion helpers.

use std::fmt::Display;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::BeerReviewsConfig;
use crate::domain::error::DomainError;
use crate::infra::storage::migrations::Migrator;

/// Convert any displayable error into a `DomainError::Database`.
pub fn db_err(e: impl Display) -> DomainError {
    let message = e.to_string();
    tracing::error!(error = %message, "Database query failed");
    DomainError::database(message)
}

/// Opens the connection pool described by `config` and, when enabled, brings
/// the schema up to date.
///
/// # Errors
/// Returns the driver error when the pool cannot be opened or a migration fails.
pub async fn connect(config: &BeerReviewsConfig) -> Result<DatabaseConnection, DbErr> {
    let (max_connections, min_connections) = if config.is_in_memory() {
        (1, 1)
    } else {
        (config.max_connections, config.min_connections)
    };

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(max_connections)
        .min_connections(min_connections)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }

    Ok(db)
}
