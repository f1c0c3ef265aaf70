//! Storage layer - database connection, entities, and repositories

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use migrations::Migrator;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use sea_orm_migration::MigratorTrait;

/// Connect to the service database, creating it and bringing the schema
/// up to date before any traffic is served.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    ensure_database_exists(config).await?;

    let db = Database::connect(config.database_url())
        .await
        .context("failed to connect to the product database")?;

    let pending = Migrator::get_pending_migrations(&db).await?;
    if !pending.is_empty() {
        tracing::info!(count = pending.len(), "applying pending migrations");
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}

/// Create the database on the server when it does not exist yet.
///
/// Only meaningful for Postgres; SQLite urls connect directly.
async fn ensure_database_exists(config: &DatabaseConfig) -> Result<()> {
    if !config.server_url.starts_with("postgres") {
        return Ok(());
    }

    let admin = Database::connect(config.admin_url())
        .await
        .context("failed to connect to the maintenance database")?;

    let existing = admin
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [config.database_name.clone().into()],
        ))
        .await?;

    if existing.is_none() {
        tracing::info!(database = %config.database_name, "creating missing database");
        admin
            .execute_unprepared(&format!("CREATE DATABASE \"{}\"", config.database_name))
            .await?;
    }

    admin.close().await?;
    Ok(())
}
